//! Watch-event synthesis: an infinite stream of viewing events for one
//! movie, paced to one element per second by a timer tick.

use std::time::Duration;

use chrono::Utc;
use futures::Stream;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use reelflix_common::{Movie, WatchEvent};

/// The fixed pool viewer names are drawn from.
pub const VIEWERS: [&str; 8] = [
    "Eric", "Tony", "Bipin", "Josh", "Louie", "Dexter", "KittyCat", "DoggyDog",
];

const TICK: Duration = Duration::from_secs(1);

/// Infinite stream of watch events for one movie, one per second.
///
/// The timer is the sole pacing mechanism: each element is synthesized when
/// its tick fires (viewer and timestamp sampled at that moment, not ahead of
/// time), and the first element arrives one full tick after subscription.
/// Nothing is spawned and nothing buffers beyond the element in flight;
/// dropping the stream releases the timer. The stream never terminates on
/// its own.
pub fn watch_events(movie: Movie) -> impl Stream<Item = WatchEvent> + Send {
    watch_events_with(movie, SmallRng::from_os_rng())
}

/// Same as [`watch_events`] with an explicit random source, so callers can
/// pass a seeded generator.
pub fn watch_events_with<R>(movie: Movie, mut rng: R) -> impl Stream<Item = WatchEvent> + Send
where
    R: Rng + Send + 'static,
{
    async_stream::stream! {
        let mut ticks = interval_at(Instant::now() + TICK, TICK);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticks.tick().await;
            yield WatchEvent {
                movie: movie.clone(),
                at: Utc::now(),
                viewer: VIEWERS[rng.random_range(0..VIEWERS.len())].to_string(),
            };
        }
    }
}
