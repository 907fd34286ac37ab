use vitrine::testing::RecordingHost;
use vitrine::{
    Catalog, Dispatched, Dispatcher, Entry, FactoryMap, Group, LaunchMode, NavSession, NavState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Screen(&'static str);

fn fixture() -> (
    Catalog<&'static str>,
    Dispatcher<FactoryMap<&'static str, Screen>>,
) {
    let catalog = Catalog::builder()
        .group(
            Group::new("demos")
                .entry(Entry::new("sheet", "Sheet", "in-place demo"))
                .entry(
                    Entry::new("widget", "Widget", "standalone demo")
                        .with_launch_mode(LaunchMode::Standalone),
                ),
        )
        .build();

    let mut builder = FactoryMap::builder();
    builder.register("sheet", || Screen("sheet")).unwrap();
    builder.register("widget", || Screen("widget")).unwrap();
    let dispatcher = Dispatcher::new(builder.build());
    dispatcher.verify(&catalog).unwrap();

    (catalog, dispatcher)
}

#[test]
fn select_then_back_round_trip() {
    let (catalog, dispatcher) = fixture();
    let mut session = NavSession::new();
    let mut host = RecordingHost::new();

    assert_eq!(session.state(), &NavState::Catalog);

    let sheet = catalog.entries().next().unwrap();
    let outcome = session.select(&dispatcher, sheet, &mut host).unwrap();
    assert_eq!(outcome, Dispatched::Shown);
    assert_eq!(session.state(), &NavState::Example("sheet"));

    assert!(session.back());
    assert_eq!(session.state(), &NavState::Catalog);
}

#[test]
fn standalone_launch_does_not_change_in_place_state() {
    let (catalog, dispatcher) = fixture();
    let mut session = NavSession::new();
    let mut host = RecordingHost::new();

    let widget = catalog.entries().nth(1).unwrap();
    let outcome = session.select(&dispatcher, widget, &mut host).unwrap();

    assert_eq!(outcome, Dispatched::Launched);
    assert_eq!(session.state(), &NavState::Catalog);
    assert_eq!(host.launched(), &["widget"]);
}

#[test]
fn failed_select_leaves_the_state_untouched() {
    let (_, dispatcher) = fixture();
    let mut session = NavSession::new();
    let mut host: RecordingHost<&'static str, Screen> = RecordingHost::new();

    let ghost = Entry::new("ghost", "Ghost", "never registered");
    assert!(session.select(&dispatcher, &ghost, &mut host).is_err());
    assert_eq!(session.state(), &NavState::Catalog);
    assert_eq!(host.handoffs(), 0);
}

#[test]
fn back_on_the_catalog_is_a_no_op() {
    let mut session: NavSession<&'static str> = NavSession::new();
    assert!(!session.back());
    assert_eq!(session.state(), &NavState::Catalog);
}

#[test]
fn repeated_selects_each_succeed_independently() {
    let (catalog, dispatcher) = fixture();
    let mut session = NavSession::new();
    let mut host = RecordingHost::new();

    // A rapid double-tap at this layer is two independent dispatches; the
    // host owns debouncing.
    let sheet = catalog.entries().next().unwrap();
    session.select(&dispatcher, sheet, &mut host).unwrap();
    session.select(&dispatcher, sheet, &mut host).unwrap();

    assert_eq!(host.shown(), &[Screen("sheet"), Screen("sheet")]);
    assert_eq!(session.state(), &NavState::Example("sheet"));
}
