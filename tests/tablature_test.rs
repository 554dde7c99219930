// Tablature appender behaviour through the public session API

use kora_tab_wasm::appender::ActionOutcome;
use kora_tab_wasm::fingering::{FingerResolver, FingerSuffix, FingeringTable};
use kora_tab_wasm::notify::{NotificationQueue, ICON_NOTE};
use kora_tab_wasm::{
    Action, EditorSession, FingerMode, FixedTool, RhythmSymbol, StringId, TablatureAppender,
    TablatureBuffer,
};

fn string(label: &str) -> StringId {
    label.parse().expect("valid string label")
}

#[test]
fn test_note_then_undo_restores_empty_buffer() {
    let mut session = EditorSession::new();

    session.add_note(string("3G"), FingerMode::Thumb, RhythmSymbol::Eighth);
    assert_eq!(session.lines(), &["♪ 3GP"]);

    session.undo_last();
    assert!(session.lines().is_empty(), "Undo should remove the only note");
}

#[test]
fn test_fixed_token_appends_after_existing_line() {
    let appender = TablatureAppender::new(FingeringTable::default());
    let mut buffer = TablatureBuffer::from_lines(vec!["x".to_string()]);
    let mut queue = NotificationQueue::new();

    appender.add_fixed_token(&mut buffer, &mut queue, FixedTool::Repeat);

    assert_eq!(buffer.lines(), &["x", "x2"]);
}

#[test]
fn test_undo_on_empty_buffer_keeps_it_empty() {
    let mut session = EditorSession::new();

    assert_eq!(session.apply(Action::Undo), ActionOutcome::NothingToUndo);
    assert!(session.lines().is_empty());
    assert_eq!(session.take_notifications().len(), 1, "Empty undo still notifies");
}

#[test]
fn test_undo_restores_prior_content_after_any_single_action() {
    let mut actions: Vec<Action> = FixedTool::all()
        .into_iter()
        .map(|tool| Action::AddFixed { tool })
        .collect();
    actions.extend(StringId::all().into_iter().map(|s| Action::AddNote {
        string: s,
        finger: FingerMode::Index,
        rhythm: RhythmSymbol::SixteenthGroup,
    }));

    for action in actions {
        let mut session = EditorSession::new();
        session.load_text("+ 1G\n=\n+ 1D");
        let before = session.lines().to_vec();

        session.apply(action);
        assert_eq!(session.lines().len(), before.len() + 1);

        session.apply(Action::Undo);
        assert_eq!(session.lines(), before.as_slice(), "Undo after {:?}", action);
    }
}

#[test]
fn test_length_equals_number_of_adds() {
    let mut session = EditorSession::new();
    let strings = StringId::all();

    for (n, s) in strings.iter().enumerate() {
        session.press_string(*s);
        if n % 3 == 0 {
            session.press_tool(FixedTool::Simultaneous);
        }
    }

    let tools = (0..strings.len()).filter(|n| n % 3 == 0).count();
    assert_eq!(session.lines().len(), strings.len() + tools);
}

#[test]
fn test_note_notification_mentions_string_and_rhythm() {
    let mut session = EditorSession::new();
    session.select_rhythm(RhythmSymbol::SixteenthBeamed);
    session.press_string(string("5D"));

    let notifications = session.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].icon, ICON_NOTE);
    assert!(notifications[0].message.contains("5D"));
    assert!(notifications[0].message.contains("♬"));
}

#[test]
fn test_injected_resolver_drives_suffix() {
    struct Numbered;

    impl FingerResolver for Numbered {
        fn resolve(&self, string: StringId, mode: FingerMode) -> FingerSuffix {
            FingerSuffix {
                suffix: format!("{}", mode as u8),
                name: format!("finger for {}", string),
            }
        }
    }

    let mut session = EditorSession::with_resolver(Numbered);
    session.select_finger_mode(FingerMode::Index);
    session.press_string(string("2G"));

    assert_eq!(session.text(), "+ 2G2");
}

#[test]
fn test_saved_text_matches_lines() {
    let mut session = EditorSession::new();
    session.press_string(string("1G"));
    session.press_tool(FixedTool::PageBreak);
    session.press_tool(FixedTool::FreeText);

    assert_eq!(session.text(), "+ 1G\n+ PAGE\n+ TXT Message");
}
