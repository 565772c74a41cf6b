//! Screen flow around the catch game
//!
//! Home (the game) -> Proposal (yes/no card) -> Letter. Everything here is
//! host-free state; the browser wiring lives in `main.rs`.

pub mod carousel;
pub mod confetti;
pub mod letter;
pub mod proposal;

pub use carousel::Carousel;
pub use confetti::ConfettiShow;
pub use letter::Letter;
pub use proposal::{ConfettiBurst, FloatingHeart, FloatingHearts, NoButton, YesButton};

/// Application screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Proposal,
    Letter,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Proposal, Route::Letter];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Proposal => "/proposal",
            Route::Letter => "/letter",
        }
    }

    /// Unknown paths fall back to the game
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/proposal" | "proposal" => Route::Proposal,
            "/letter" | "letter" => Route::Letter,
            _ => Route::Home,
        }
    }

    /// DOM id of the screen container
    pub fn view_id(&self) -> &'static str {
        match self {
            Route::Home => "home-view",
            Route::Proposal => "proposal-view",
            Route::Letter => "letter-view",
        }
    }
}

/// One visit to one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTicket {
    route: Route,
    visit: u64,
}

/// Tracks the mounted screen. Every arrival starts a new visit, so a delayed
/// hop scheduled during an earlier visit can be recognised as stale.
#[derive(Debug, Default)]
pub struct Navigator {
    route: Route,
    visit: u64,
}

impl Navigator {
    pub fn new(route: Route) -> Self {
        Self { route, visit: 0 }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Mount `route`, ending the current visit
    pub fn arrive(&mut self, route: Route) {
        self.route = route;
        self.visit += 1;
    }

    /// Ticket for the current visit
    pub fn ticket(&self) -> NavTicket {
        NavTicket {
            route: self.route,
            visit: self.visit,
        }
    }

    /// Whether the visit `ticket` was issued in is still going
    pub fn is_current(&self, ticket: NavTicket) -> bool {
        self.ticket() == ticket
    }
}
