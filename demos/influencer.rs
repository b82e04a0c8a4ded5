//! `Influencer` example
//!
//! Two influencers, three followers. Everybody follows both influencers, both
//! post, one follower leaves each influencer and both post again.
//!
//! To run this example, execute `cargo run --example influencer`.

use influencer::{Article, Influencer, ListenerHandle, Subscriber};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    // Influencers.
    let maezawa = Influencer::new("Maezawa");
    let horiemon = Influencer::new("Horiemon");

    // Followers.
    let tanaka = ListenerHandle::new(Subscriber::new("Tanaka"));
    let suzuki = ListenerHandle::new(Subscriber::new("Suzuki"));
    let yamada = ListenerHandle::new(Subscriber::new("Yamada"));

    for influencer in [&maezawa, &horiemon] {
        influencer.add_listener(tanaka.clone());
        influencer.add_listener(suzuki.clone());
        influencer.add_listener(yamada.clone());
    }

    // Notifies Tanaka, Suzuki and Yamada, in that order.
    maezawa.post(Article::new("maezawa_moon_trip"));
    horiemon.post(Article::new("horiemon_livedoor_collapse"));

    maezawa.remove_listener(&tanaka);
    horiemon.remove_listener(&yamada);

    // Suzuki and Yamada only.
    maezawa.post(Article::new("hikakin_money_giveaway"));
    // Tanaka and Suzuki only.
    horiemon.post(Article::new("yakiniku_shop"));
}
