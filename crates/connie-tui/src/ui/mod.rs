//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod panel;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Render the entire UI.
///
/// `simulate` adds the simulation key hints to the status bar.
pub fn render(frame: &mut Frame, app: &App, simulate: bool) {
    const PANEL_MIN_HEIGHT: u16 = 9;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(PANEL_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [panel_area, status_area] = chunks.as_ref() else {
        return;
    };

    panel::render(frame, app, *panel_area);
    status::render(frame, app, simulate, *status_area);
}

#[cfg(test)]
mod tests {
    use connie_app::AppEvent;
    use connie_core::{ActorRole, Destination, TripPhase, UserProfile};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(app: &App, simulate: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|frame| render(frame, app, simulate)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn passenger() -> App {
        let mut app = App::new(ActorRole::Passenger)
            .with_destination(Destination::new("Corner Store", "12 Main St"));
        app.handle(AppEvent::ProfileLoaded(UserProfile::new("u-1", "Ana", ActorRole::Passenger)));
        app
    }

    #[test]
    fn request_panel_shows_destination_and_button() {
        let screen = draw(&passenger(), false);

        assert!(screen.contains("Corner Store"));
        assert!(screen.contains("12 Main St"));
        assert!(screen.contains("CALL CONNIE"));
        assert!(screen.contains("Ana"));
    }

    #[test]
    fn address_hidden_after_pickup_pending() {
        let mut app = passenger();
        for phase in [TripPhase::Accepted, TripPhase::ActorArrived, TripPhase::PickupPending] {
            app.handle(AppEvent::PhaseChanged(phase));
        }
        let screen = draw(&app, false);

        assert!(screen.contains("Connie Arrived!"));
        assert!(screen.contains("MEET CURBSIDE"));
        assert!(!screen.contains("12 Main St"));
    }

    #[test]
    fn disabled_button_label_is_rendered() {
        let mut app = App::new(ActorRole::Driver);
        app.handle(AppEvent::ProfileLoaded(UserProfile::new("u-2", "Tom", ActorRole::Driver)));
        app.handle(AppEvent::PhaseChanged(TripPhase::InProgress));
        let screen = draw(&app, false);

        assert!(screen.contains("KICK IT CURBSIDE"));
        assert!(screen.contains("(disabled)"));
    }

    #[test]
    fn waiting_panel_without_profile() {
        let mut app = App::new(ActorRole::Passenger);
        app.handle(AppEvent::PhaseChanged(TripPhase::Accepted));
        let screen = draw(&app, false);

        assert!(screen.contains("Waiting for profile..."));
        assert!(!screen.contains("MEET GUEST"));
    }

    #[test]
    fn status_bar_shows_phase_role_and_hints() {
        let screen = draw(&passenger(), true);

        assert!(screen.contains("requesting ride"));
        assert!(screen.contains("passenger"));
        assert!(screen.contains("n: next phase"));
    }
}
