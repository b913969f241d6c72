//! Shared fixtures for aurebesh-core integration tests.

#![allow(dead_code)]

use aurebesh_core::{
    Curriculum, Screen, Session, SymbolEntry, SymbolKind, SymbolTable, TimerLog, TrainerSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestSession = Session<TimerLog, StdRng>;

/// Table with the six singles `a`-`f` only.
pub fn six_letter_table() -> SymbolTable {
    let names = [
        ("a", "Aurek"),
        ("b", "Besh"),
        ("c", "Cresh"),
        ("d", "Dorn"),
        ("e", "Esk"),
        ("f", "Forn"),
    ];
    SymbolTable::new(
        names
            .iter()
            .map(|(token, name)| SymbolEntry::new(token, name, &name.to_lowercase(), SymbolKind::Single))
            .collect(),
    )
    .expect("fixture table is valid")
}

/// Session over [`six_letter_table`] split into three sections.
pub fn six_letter_session(seed: u64) -> TestSession {
    let settings = TrainerSettings {
        section_count: 3,
        ..TrainerSettings::default()
    };
    let curriculum = Curriculum::new(&six_letter_table(), &settings);
    Session::new(curriculum, settings, TimerLog::new(), StdRng::seed_from_u64(seed))
}

/// Standard chart session with a fixed seed.
pub fn standard_session(seed: u64) -> TestSession {
    Session::new(
        Curriculum::default(),
        TrainerSettings::default(),
        TimerLog::new(),
        StdRng::seed_from_u64(seed),
    )
}

/// Fire the oldest pending timer, as the host event loop would.
pub fn fire(session: &mut TestSession) -> bool {
    let id = session
        .timers_mut()
        .fire_next()
        .expect("a timer should be pending");
    session.on_timer(id)
}

/// Let the study countdown run out, then answer every question.
///
/// `wrong` holds quiz positions to answer incorrectly.
pub fn study_and_answer(session: &mut TestSession, wrong: &[usize]) {
    assert_eq!(session.state().screen, Screen::Study);
    assert!(fire(session));

    let mut position = 0;
    while session.state().screen == Screen::Quiz {
        let target = session
            .view()
            .question
            .map(|q| {
                let quiz = session.state().quiz.as_ref().unwrap();
                assert_eq!(q.number, quiz.index + 1);
                quiz.current().unwrap().item.latin.clone()
            })
            .expect("question on screen");
        let token = if wrong.contains(&position) {
            "wrong".to_string()
        } else {
            target
        };
        session.submit_answer(&token);
        assert!(fire(session));
        position += 1;
    }
}

pub fn latin(session: &TestSession) -> Vec<String> {
    session
        .state()
        .study_letters
        .iter()
        .map(|i| i.latin.clone())
        .collect()
}
