//! Static screen table for the Pizza Party frame graph.
//!
//! Screens are compiled-in configuration: every screen's image, button
//! labels and route live here, defined once and shared read-only across
//! all requests. A button's meaning is not stored on the screen; it is
//! whatever the transition table in [`super::navigator`] says for that
//! `(screen, index)` pair.

use serde::{Deserialize, Serialize};

/// One node in the navigation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Home,
    Game,
    Entered,
    Jackpot,
    Wallet,
    Connected,
    Share,
}

/// Static configuration for one screen.
pub struct Screen {
    pub image: &'static str,
    pub buttons: &'static [&'static str],
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Home,
        ScreenId::Game,
        ScreenId::Entered,
        ScreenId::Jackpot,
        ScreenId::Wallet,
        ScreenId::Connected,
        ScreenId::Share,
    ];

    /// Parse a route segment. Unknown ids fall back to the root screen:
    /// a stale or hand-edited frame URL must still render something.
    pub fn parse(s: &str) -> ScreenId {
        match s {
            "home" => ScreenId::Home,
            "game" => ScreenId::Game,
            "entered" => ScreenId::Entered,
            "jackpot" => ScreenId::Jackpot,
            "wallet" => ScreenId::Wallet,
            "connected" => ScreenId::Connected,
            "share" => ScreenId::Share,
            _ => ScreenId::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Home => "home",
            ScreenId::Game => "game",
            ScreenId::Entered => "entered",
            ScreenId::Jackpot => "jackpot",
            ScreenId::Wallet => "wallet",
            ScreenId::Connected => "connected",
            ScreenId::Share => "share",
        }
    }

    /// Route the Farcaster client should POST the next button press to.
    /// The root screen owns the bare frame route.
    pub fn route(&self) -> String {
        match self {
            ScreenId::Home => "/api/frame".to_string(),
            other => format!("/api/frame/{}", other.as_str()),
        }
    }

    pub fn screen(&self) -> &'static Screen {
        match self {
            ScreenId::Home => &HOME,
            ScreenId::Game => &GAME,
            ScreenId::Entered => &ENTERED,
            ScreenId::Jackpot => &JACKPOT,
            ScreenId::Wallet => &WALLET,
            ScreenId::Connected => &CONNECTED,
            ScreenId::Share => &SHARE,
        }
    }
}

static HOME: Screen = Screen {
    image: "/images/frame/home.png",
    buttons: &[
        "Play Daily Game",
        "View Jackpot",
        "Connect Wallet",
        "Share Pizza Party",
    ],
};

static GAME: Screen = Screen {
    image: "/images/frame/game.png",
    buttons: &["Enter Game (1 VMF)", "View Jackpot", "Back to Home"],
};

static ENTERED: Screen = Screen {
    image: "/images/frame/entered.png",
    buttons: &["🎮 ENTER GAME $1 VMF", "View Jackpot", "Back to Home"],
};

static JACKPOT: Screen = Screen {
    image: "/images/frame/jackpot.png",
    buttons: &["Refresh Jackpot", "Play Daily Game", "Back to Home"],
};

static WALLET: Screen = Screen {
    image: "/images/frame/wallet.png",
    buttons: &["Connect Wallet", "View Jackpot", "Back to Home"],
};

static CONNECTED: Screen = Screen {
    image: "/images/frame/connected.png",
    buttons: &["✅ Wallet Connected", "Play Daily Game", "Back to Home"],
};

static SHARE: Screen = Screen {
    image: "/images/frame/share.png",
    buttons: &["Share Pizza Party", "Play Daily Game", "Back to Home"],
};
