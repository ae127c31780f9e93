mod command;

use std::{
    io::{self, BufRead},
    thread,
    time::Instant,
};

use crossbeam_channel::{at, never, select, unbounded, Receiver};
use songstagram_core::{
    config::Config,
    debounce::Debounce,
    explore::{ExploreSession, SearchOutcome},
    view::ViewState,
};

use crate::command::Command;

fn main() {
    env_logger::init();

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("using default config: {}", err);
        Config::default()
    });
    let debounce = Debounce::trailing(config.search_debounce());
    let session = ExploreSession::new(&config);

    run(session, debounce, spawn_stdin_reader());
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (sender, receiver) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    receiver
}

fn run(mut session: ExploreSession, mut debounce: Debounce<String>, lines: Receiver<String>) {
    print_state(&session);
    loop {
        let settled = match debounce.deadline() {
            Some(deadline) => at(deadline),
            None => never(),
        };
        select! {
            recv(lines) -> line => match line {
                Ok(line) => {
                    if !handle_line(&mut session, &mut debounce, &line) {
                        break;
                    }
                }
                Err(_) => {
                    flush_pending(&mut session, &mut debounce);
                    break;
                }
            },
            recv(settled) -> _ => {
                if let Some(term) = debounce.poll(Instant::now()) {
                    settle(&mut session, &term);
                }
            },
        }
    }
}

/// Settles a still pending search right away, used once input has ended.
fn flush_pending(session: &mut ExploreSession, debounce: &mut Debounce<String>) {
    let pending = debounce
        .deadline()
        .and_then(|deadline| debounce.poll(deadline));
    if let Some(term) = pending {
        settle(session, &term);
    }
}

fn settle(session: &mut ExploreSession, term: &str) -> SearchOutcome {
    let outcome = session.settle_search(term);
    match &outcome {
        SearchOutcome::Idle => {}
        SearchOutcome::Dismissed => println!("search closed"),
        SearchOutcome::Query(query) => println!("searching “{}”", query),
        SearchOutcome::Opened(_) => print_state(session),
    }
    outcome
}

/// Returns `false` once the session should end.
fn handle_line(session: &mut ExploreSession, debounce: &mut Debounce<String>, line: &str) -> bool {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            println!("{}", err);
            return true;
        }
    };
    match command {
        Command::Type(term) => {
            session.type_search(&term);
            debounce.input(term, Instant::now());
            return true;
        }
        Command::Search(query) => {
            session.submit_search(&query);
        }
        Command::Open(view) => {
            session.navigate(view);
        }
        Command::Back(count) => {
            session.navigate_back_by(count);
        }
        Command::Forward => {
            session.navigate_forward();
        }
        Command::Refresh => {
            print_view(session.refresh());
            return true;
        }
        Command::History => {
            print_history(session);
            return true;
        }
        Command::Show => {
            match serde_json::to_string_pretty(session.current()) {
                Ok(json) => println!("{}", json),
                Err(err) => log::error!("failed to serialize view: {}", err),
            }
            return true;
        }
        Command::Quit => return false,
    }
    debounce.cancel();
    print_state(session);
    true
}

fn print_state(session: &ExploreSession) {
    let history = session.history();
    println!(
        "[{}/{}] {} {}{}",
        history.cursor() + 1,
        history.len(),
        if session.can_go_back() { "<" } else { " " },
        if session.can_go_forward() { ">" } else { " " },
        if session.is_search_active() {
            " (search)"
        } else {
            ""
        },
    );
    print_view(session.current());
}

fn print_view(state: &ViewState) {
    println!("{}", state.view.full_title());
}

fn print_history(session: &ExploreSession) {
    let history = session.history();
    for entry in history.entries() {
        let marker = if entry.position == history.cursor() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:>3} {:<14} {}",
            marker,
            entry.position,
            entry.kind().as_str(),
            entry.view.title()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use songstagram_core::{config::Config, view::View};

    use super::*;

    fn setup() -> (ExploreSession, Debounce<String>) {
        (
            ExploreSession::new(&Config::default()),
            Debounce::trailing(Duration::from_millis(250)),
        )
    }

    #[test]
    fn test_type_arms_debounce() {
        let (mut session, mut debounce) = setup();
        assert!(handle_line(&mut session, &mut debounce, "type muse"));
        assert_eq!(session.search_term(), "muse");
        assert!(debounce.is_pending());
        assert!(!session.is_search_active());
    }

    #[test]
    fn test_navigation_cancels_pending_search() {
        for line in ["open artist abc123", "search muse", "back", "forward"] {
            let (mut session, mut debounce) = setup();
            handle_line(&mut session, &mut debounce, "type mu");
            assert!(handle_line(&mut session, &mut debounce, line));
            assert!(!debounce.is_pending(), "{}", line);
        }
    }

    #[test]
    fn test_inspection_keeps_pending_search() {
        for line in ["refresh", "history", "show", "nonsense"] {
            let (mut session, mut debounce) = setup();
            handle_line(&mut session, &mut debounce, "type mu");
            assert!(handle_line(&mut session, &mut debounce, line));
            assert!(debounce.is_pending(), "{}", line);
        }
    }

    #[test]
    fn test_open_and_back() {
        let (mut session, mut debounce) = setup();
        handle_line(&mut session, &mut debounce, "open artist abc123");
        handle_line(&mut session, &mut debounce, "open discography abc123 album");
        assert_eq!(session.history().len(), 3);

        handle_line(&mut session, &mut debounce, "back 2");
        assert_eq!(session.current().view, View::Home);

        handle_line(&mut session, &mut debounce, r#"open {"kind":"artist","payload":"  "}"#);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_quit_ends_session() {
        let (mut session, mut debounce) = setup();
        assert!(!handle_line(&mut session, &mut debounce, "quit"));
    }

    #[test]
    fn test_flush_settles_pending_search() {
        let (mut session, mut debounce) = setup();
        handle_line(&mut session, &mut debounce, "type muse");

        flush_pending(&mut session, &mut debounce);
        assert!(session.is_search_active());
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_flush_without_pending_is_noop() {
        let (mut session, mut debounce) = setup();
        flush_pending(&mut session, &mut debounce);
        assert!(!session.is_search_active());
    }

    #[test]
    fn test_settled_link_opens_view() {
        let (mut session, _) = setup();
        assert_eq!(
            settle(&mut session, "spotify:track:t1"),
            SearchOutcome::Opened(View::Track("t1".into()))
        );
        assert_eq!(session.current().view, View::Track("t1".into()));
    }
}
