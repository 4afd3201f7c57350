//! Table-driven navigation engine.
//!
//! One `(screen, button index)` transition table replaces the per-route
//! switch blocks this service grew out of. The engine is a pure function
//! of static data: no per-user or per-session state, safe for unlimited
//! concurrent readers.

use serde::{Deserialize, Serialize};

use super::screen::ScreenId;

/// A single button in a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameButton {
    pub label: String,
}

/// The `frames` payload a Farcaster client renders next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub version: String,
    pub image: String,
    pub buttons: Vec<FrameButton>,
    #[serde(rename = "postUrl")]
    pub post_url: String,
}

/// Top-level frame response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameResponse {
    pub frames: FrameDescriptor,
}

/// Outcome of one navigation step, for logging and analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub target: ScreenId,
    pub fell_back: bool,
}

/// Explicit transition table. Every pair not listed here falls back to
/// redisplaying the current screen.
fn transition(screen: ScreenId, index: u8) -> Option<ScreenId> {
    use ScreenId::*;
    match (screen, index) {
        (Home, 1) => Some(Game),
        (Home, 2) => Some(Jackpot),
        (Home, 3) => Some(Wallet),
        (Home, 4) => Some(Share),

        (Game, 1) => Some(Entered),
        (Game, 2) => Some(Jackpot),
        (Game, 3) => Some(Home),

        (Entered, 1) => Some(Entered),
        (Entered, 2) => Some(Jackpot),
        (Entered, 3) => Some(Home),

        (Jackpot, 1) => Some(Jackpot),
        (Jackpot, 2) => Some(Game),
        (Jackpot, 3) => Some(Home),

        (Wallet, 1) => Some(Connected),
        (Wallet, 2) => Some(Jackpot),
        (Wallet, 3) => Some(Home),

        (Connected, 1) => Some(Connected),
        (Connected, 2) => Some(Game),
        (Connected, 3) => Some(Home),

        (Share, 1) => Some(Share),
        (Share, 2) => Some(Game),
        (Share, 3) => Some(Home),

        _ => None,
    }
}

/// The navigation engine. Holds only the public base URL used to
/// absolutize image and post URLs; the graph itself is static.
pub struct Navigator {
    base_url: String,
}

impl Navigator {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let mut base_url = public_base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Advance one step. A missing or unwired index redisplays the
    /// current screen rather than erroring; malformed input must never
    /// break a user's navigation.
    pub fn step(&self, screen: ScreenId, index: Option<u8>) -> Step {
        match index.and_then(|i| transition(screen, i)) {
            Some(target) => Step {
                target,
                fell_back: false,
            },
            None => Step {
                target: screen,
                fell_back: true,
            },
        }
    }

    /// Render `screen`'s descriptor. Built fresh per call, never stored.
    pub fn render(&self, screen: ScreenId) -> FrameResponse {
        let def = screen.screen();
        FrameResponse {
            frames: FrameDescriptor {
                version: "vNext".to_string(),
                image: format!("{}{}", self.base_url, def.image),
                buttons: def
                    .buttons
                    .iter()
                    .map(|label| FrameButton {
                        label: (*label).to_string(),
                    })
                    .collect(),
                post_url: format!("{}{}", self.base_url, screen.route()),
            },
        }
    }

    /// `resolve` from the frame routes: step, then render the target.
    pub fn resolve(&self, screen: ScreenId, index: Option<u8>) -> FrameResponse {
        self.render(self.step(screen, index).target)
    }
}

/// Lenient `buttonIndex` extraction from a raw request body.
///
/// Only a JSON object carrying an unsigned integer `buttonIndex` that
/// fits in `u8` yields an index. Unparseable bodies (including invalid
/// UTF-8), missing keys, strings, floats and negatives all read as
/// "no index", which the engine turns into the current screen's
/// default descriptor.
pub fn parse_button_index(body: &[u8]) -> Option<u8> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let index = value.get("buttonIndex")?.as_u64()?;
    u8::try_from(index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigator {
        Navigator::new("https://pizza.example")
    }

    #[test]
    fn root_menu_has_four_buttons() {
        let frame = nav().resolve(ScreenId::Home, None).frames;
        let labels: Vec<&str> = frame.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Play Daily Game",
                "View Jackpot",
                "Connect Wallet",
                "Share Pizza Party"
            ]
        );
        assert_eq!(frame.version, "vNext");
        assert_eq!(frame.post_url, "https://pizza.example/api/frame");
        assert_eq!(frame.image, "https://pizza.example/images/frame/home.png");
    }

    #[test]
    fn home_button_one_opens_game() {
        let frame = nav().resolve(ScreenId::Home, Some(1)).frames;
        let labels: Vec<&str> = frame.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Enter Game (1 VMF)", "View Jackpot", "Back to Home"]
        );
        assert_eq!(frame.post_url, "https://pizza.example/api/frame/game");
    }

    #[test]
    fn game_button_one_enters_game() {
        let frame = nav().resolve(ScreenId::Game, Some(1)).frames;
        assert_eq!(frame.buttons[0].label, "🎮 ENTER GAME $1 VMF");
    }

    #[test]
    fn unwired_indices_redisplay_current_screen() {
        let nav = nav();
        for screen in ScreenId::ALL {
            let default = nav.resolve(screen, None);
            for index in [0u8, 5, 9, u8::MAX] {
                assert_eq!(nav.resolve(screen, Some(index)), default, "{screen:?}/{index}");
            }
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        let nav = nav();
        for screen in ScreenId::ALL {
            for index in 0..=5u8 {
                let a = serde_json::to_string(&nav.resolve(screen, Some(index))).unwrap();
                let b = serde_json::to_string(&nav.resolve(screen, Some(index))).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn back_to_home_reaches_root_from_every_screen() {
        let nav = nav();
        let root = nav.resolve(ScreenId::Home, None);
        for screen in ScreenId::ALL {
            if screen == ScreenId::Home {
                continue;
            }
            let buttons = screen.screen().buttons;
            let back = buttons
                .iter()
                .position(|l| *l == "Back to Home")
                .map(|p| p as u8 + 1)
                .unwrap_or_else(|| panic!("{screen:?} has no Back to Home button"));
            assert_eq!(nav.resolve(screen, Some(back)), root, "{screen:?}");
        }
    }

    #[test]
    fn every_screen_is_reachable_from_home() {
        use std::collections::HashSet;
        let mut seen = HashSet::from([ScreenId::Home]);
        let mut frontier = vec![ScreenId::Home];
        while let Some(screen) = frontier.pop() {
            for index in 1..=screen.screen().buttons.len() as u8 {
                if let Some(next) = transition(screen, index) {
                    if seen.insert(next) {
                        frontier.push(next);
                    }
                }
            }
        }
        assert_eq!(seen.len(), ScreenId::ALL.len());
    }

    #[test]
    fn transitions_stay_within_button_count() {
        for screen in ScreenId::ALL {
            let count = screen.screen().buttons.len() as u8;
            for index in (count + 1)..=u8::MAX {
                assert!(transition(screen, index).is_none(), "{screen:?}/{index}");
            }
            assert!(transition(screen, 0).is_none());
        }
    }

    #[test]
    fn button_index_parsing_is_fail_safe() {
        assert_eq!(parse_button_index(br#"{"buttonIndex":2}"#), Some(2));
        assert_eq!(parse_button_index(br#"{"buttonIndex":0}"#), Some(0));
        assert_eq!(parse_button_index(br#"{"buttonIndex":"1"}"#), None);
        assert_eq!(parse_button_index(br#"{"buttonIndex":-3}"#), None);
        assert_eq!(parse_button_index(br#"{"buttonIndex":1.5}"#), None);
        assert_eq!(parse_button_index(br#"{"buttonIndex":300}"#), None);
        assert_eq!(parse_button_index(br#"{}"#), None);
        assert_eq!(parse_button_index(b"not json"), None);
        assert_eq!(parse_button_index(b""), None);
        assert_eq!(parse_button_index(&[0xff, 0xfe, 0x80]), None);
    }

    #[test]
    fn unknown_screen_id_parses_as_home() {
        assert_eq!(ScreenId::parse("jackpot"), ScreenId::Jackpot);
        assert_eq!(ScreenId::parse("no-such-screen"), ScreenId::Home);
        assert_eq!(ScreenId::parse(""), ScreenId::Home);
    }
}
