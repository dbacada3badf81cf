// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_element` crate.
//!
//! These drive an `Element` through attachment, property writes and forwarded
//! attribute changes, and check what reaches the host attributes, the
//! observers and the renderer, and in which order.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use understory_element::{
    CoercionError, Component, Definition, Element, Host, MemoryHost, Observer, PLACEHOLDER_TEMPLATE,
    Props, PropertyDescriptor, RecordingDiagnostics, Renderer, Schema, ScopedLookup, Value,
    Warning,
};

type Log = Rc<RefCell<Vec<String>>>;

/// Paints template text into `Frames` and records each render in the log.
struct Recorder {
    log: Log,
}

#[derive(Debug, Default)]
struct Frames {
    frames: Vec<String>,
    ids: Vec<(String, usize)>,
}

impl Renderer for Recorder {
    type Template = String;
    type Root = Frames;

    fn render(&mut self, template: String, root: &mut Frames) {
        self.log.borrow_mut().push(format!("render:{template}"));
        root.frames.push(template);
        root.ids = vec![
            ("title".into(), root.frames.len()),
            ("body".into(), root.frames.len() * 10),
        ];
    }
}

impl ScopedLookup for Frames {
    type Node = usize;

    fn identified(&self) -> Vec<(String, usize)> {
        self.ids.clone()
    }
}

fn show(value: Option<&Value>) -> String {
    value
        .and_then(Value::attribute_text)
        .unwrap_or_else(|| "-".into())
}

fn record(el: &Element<impl Component<Renderer = Recorder> + Logged>, entry: String) {
    el.component().log().borrow_mut().push(entry);
}

trait Logged {
    fn log(&self) -> &Log;
}

// =============================================================================
// Widget: the component most tests use.
// =============================================================================

struct Widget {
    log: Log,
}

impl Logged for Widget {
    fn log(&self) -> &Log {
        &self.log
    }
}

impl Component for Widget {
    type Renderer = Recorder;

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.register::<f64>(
            "count",
            PropertyDescriptor::number().value(0).observer("count_changed"),
        );
        schema.register::<bool>(
            "active",
            PropertyDescriptor::boolean()
                .reflect_to_attribute(true)
                .observer("active_changed"),
        );
        schema.register::<String>(
            "headerText",
            PropertyDescriptor::string().reflect_to_attribute(true),
        );
        schema.register::<f64>(
            "level",
            PropertyDescriptor::number().reflect_to_attribute(true),
        );
        schema.declare("note");
        schema
    }

    fn observer(name: &str) -> Option<Observer<Self>> {
        match name {
            "count_changed" => Some(count_changed),
            "active_changed" => Some(active_changed),
            _ => None,
        }
    }

    fn render(&self, props: &Props<'_>) -> String {
        format!(
            "count={} active={} header={} level={}",
            show(props.value("count")),
            show(props.value("active")),
            show(props.value("headerText")),
            show(props.value("level")),
        )
    }

    fn after_first_render(element: &mut Element<Self>) {
        record(element, "after-first-render".into());
    }
}

fn count_changed(el: &mut Element<Widget>, value: &Value) {
    record(el, format!("observe:count={}", show(Some(value))));
}

fn active_changed(el: &mut Element<Widget>, value: &Value) {
    record(el, format!("observe:active={}", show(Some(value))));
}

fn widget(host: MemoryHost) -> (Element<Widget>, Log, RecordingDiagnostics) {
    let log = Log::default();
    let diagnostics = RecordingDiagnostics::new();
    let el = Definition::<Widget>::new()
        .construct(
            Widget { log: log.clone() },
            host,
            Recorder { log: log.clone() },
            Frames::default(),
        )
        .with_diagnostics(diagnostics.clone());
    (el, log, diagnostics)
}

fn renders<C: Component<Renderer = Recorder>>(el: &Element<C>) -> usize {
    el.root().frames.len()
}

fn last_frame<C: Component<Renderer = Recorder>>(el: &Element<C>) -> &str {
    el.root().frames.last().map(String::as_str).unwrap_or_default()
}

/// Stands in for the platform: mutates the host attribute and forwards the
/// change.
fn external_set(
    el: &mut Element<impl Component>,
    name: &str,
    text: Option<&str>,
) -> Result<(), CoercionError> {
    let old = el.host().get_attribute(name);
    match text {
        Some(text) => el.host_mut().set_attribute(name, text),
        None => el.host_mut().remove_attribute(name),
    }
    el.attribute_changed(name, old.as_deref(), text)
}

// =============================================================================
// Names and observed attributes
// =============================================================================

#[test]
fn attribute_names_are_kebab_case_and_invert() {
    let (el, _, _) = widget(MemoryHost::new());
    let names = el.attribute_names();
    for (id, entry) in el.schema().iter() {
        let attr = names.attribute(id).unwrap();
        assert_eq!(names.property(attr), Some(id), "{}", entry.name());
    }
    let header = el.schema().by_name("headerText").unwrap();
    assert_eq!(names.attribute(header), Some("header-text"));
}

#[test]
fn only_reflected_properties_are_observed() {
    let definition = Definition::<Widget>::new();
    assert_eq!(
        definition.observed_attributes(),
        vec!["active", "header-text", "level"]
    );
}

#[test]
fn unobserved_attribute_changes_are_ignored() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    let before = renders(&el);

    external_set(&mut el, "count", Some("9")).unwrap();
    external_set(&mut el, "unknown", Some("1")).unwrap();

    assert_eq!(el.value("count"), Some(&Value::Number(0.0)));
    assert_eq!(renders(&el), before);
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn default_applies_without_markup() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();

    let count = el.schema().property::<f64>("count").unwrap();
    assert_eq!(el.get(count), Some(0.0));
    assert_eq!(renders(&el), 1);
    assert_eq!(last_frame(&el), "count=0 active=false header= level=0");
    assert_eq!(
        *log.borrow(),
        [
            "observe:count=0",
            "observe:active=false",
            "render:count=0 active=false header= level=0",
            "after-first-render",
        ]
    );
}

#[test]
fn markup_attribute_wins_over_default_with_a_single_render() {
    let (mut el, _, _) = widget(MemoryHost::new().with_attribute("count", "5"));
    el.attach();

    let count = el.schema().property::<f64>("count").unwrap();
    assert_eq!(el.get(count), Some(5.0));
    assert_eq!(el.root().frames, ["count=5 active=false header= level=0"]);
}

#[test]
fn present_boolean_attribute_reads_true() {
    let (mut el, _, _) = widget(MemoryHost::new().with_attribute("active", ""));
    el.attach();

    assert_eq!(el.value("active"), Some(&Value::Bool(true)));
    assert!(el.host().has_attribute("active"));
}

#[test]
fn reflected_markup_is_coerced() {
    let host = MemoryHost::new()
        .with_attribute("header-text", "Inbox")
        .with_attribute("level", "0x10");
    let (mut el, _, _) = widget(host);
    el.attach();

    assert_eq!(el.value("headerText"), Some(&Value::from("Inbox")));
    assert_eq!(el.value("level"), Some(&Value::Number(16.0)));
    assert_eq!(renders(&el), 1);
}

#[test]
fn undescribed_property_takes_markup_text_as_is() {
    let (mut el, _, _) = widget(MemoryHost::new().with_attribute("note", "42"));
    el.attach();
    assert_eq!(el.value("note"), Some(&Value::from("42")));
}

#[test]
fn after_first_render_runs_once_and_reattach_only_renders() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    let count = el.schema().property::<f64>("count").unwrap();
    el.set(count, 4.0).unwrap();

    el.attach();

    assert_eq!(el.get(count), Some(4.0));
    assert_eq!(renders(&el), 3);
    let hooks = log
        .borrow()
        .iter()
        .filter(|e| *e == "after-first-render")
        .count();
    assert_eq!(hooks, 1);
}

#[test]
fn writes_before_attach_are_kept_and_not_rendered() {
    let (mut el, log, _) = widget(MemoryHost::new());
    let count = el.schema().property::<f64>("count").unwrap();
    el.set(count, 3.0).unwrap();

    assert_eq!(renders(&el), 0);
    assert!(log.borrow().is_empty());

    el.attach();
    assert_eq!(el.get(count), Some(3.0));
    assert_eq!(renders(&el), 1);
}

// =============================================================================
// Reflection
// =============================================================================

#[test]
fn boolean_reflection_toggles_the_attribute() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    let active = el.schema().property::<bool>("active").unwrap();

    el.set(active, true).unwrap();
    assert!(el.host().has_attribute("active"));
    assert_eq!(el.get(active), Some(true));

    el.set(active, false).unwrap();
    assert!(!el.host().has_attribute("active"));
    assert_eq!(el.get(active), Some(false));
}

#[test]
fn boolean_false_sentinels_remove_the_attribute() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();

    for value in [Value::Bool(false), Value::from("false"), Value::Null] {
        el.set_value("active", true).unwrap();
        assert!(el.host().has_attribute("active"));

        el.set_value("active", value.clone()).unwrap();
        assert!(!el.host().has_attribute("active"), "{value:?}");
        assert_eq!(el.value("active"), Some(&Value::Bool(false)), "{value:?}");
    }
}

#[test]
fn string_empty_sentinels_remove_the_attribute() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();

    for value in [Value::from(""), Value::Null, Value::from("null")] {
        el.set_value("headerText", "Title").unwrap();
        assert_eq!(
            el.host().get_attribute("header-text").as_deref(),
            Some("Title")
        );

        el.set_value("headerText", value.clone()).unwrap();
        assert!(!el.host().has_attribute("header-text"), "{value:?}");
        assert_eq!(el.value("headerText"), Some(&Value::from("")), "{value:?}");
    }
}

#[test]
fn numbers_reflect_as_text() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    el.set_value("level", 2.5).unwrap();
    assert_eq!(el.host().get_attribute("level").as_deref(), Some("2.5"));
    assert_eq!(el.value("level"), Some(&Value::Number(2.5)));
}

// =============================================================================
// Attribute change handling
// =============================================================================

#[test]
fn external_changes_are_coerced_before_notifying() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    log.borrow_mut().clear();

    external_set(&mut el, "active", Some("")).unwrap();

    assert_eq!(el.value("active"), Some(&Value::Bool(true)));
    assert_eq!(
        *log.borrow(),
        [
            "observe:active=true",
            "render:count=0 active=true header= level=0",
        ]
    );
}

#[test]
fn external_false_sentinel_is_removed_from_the_host() {
    let (mut el, _, _) = widget(MemoryHost::new().with_attribute("active", ""));
    el.attach();

    external_set(&mut el, "active", Some("false")).unwrap();
    assert!(!el.host().has_attribute("active"));
    assert_eq!(el.value("active"), Some(&Value::Bool(false)));

    // Already false: the attribute is still cleared, but nothing is notified.
    let before = renders(&el);
    external_set(&mut el, "active", Some("null")).unwrap();
    assert!(!el.host().has_attribute("active"));
    assert_eq!(renders(&el), before);
}

#[test]
fn external_string_sentinel_is_removed_from_the_host() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    external_set(&mut el, "header-text", Some("Inbox")).unwrap();
    log.borrow_mut().clear();

    external_set(&mut el, "header-text", Some("null")).unwrap();
    assert!(!el.host().has_attribute("header-text"));
    assert_eq!(el.value("headerText"), Some(&Value::from("")));
    assert_eq!(
        *log.borrow(),
        ["render:count=0 active=false header= level=0"]
    );

    // Already empty: the attribute is cleared again without a render.
    let before = renders(&el);
    external_set(&mut el, "header-text", Some("")).unwrap();
    assert!(!el.host().has_attribute("header-text"));
    assert_eq!(el.value("headerText"), Some(&Value::from("")));
    assert_eq!(renders(&el), before);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn boolean_follows_host_presence_not_forwarded_text() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    log.borrow_mut().clear();

    // Forwarded as present while the host has no such attribute.
    el.attribute_changed("active", None, Some("")).unwrap();
    assert_eq!(el.value("active"), Some(&Value::Bool(false)));
    assert!(!el.host().has_attribute("active"));
    assert!(log.borrow().is_empty());

    el.host_mut().set_attribute("active", "");
    el.attribute_changed("active", None, Some("")).unwrap();
    assert_eq!(el.value("active"), Some(&Value::Bool(true)));
    assert_eq!(log.borrow()[0], "observe:active=true");
}

#[test]
fn removed_number_attribute_reads_zero() {
    let (mut el, _, _) = widget(MemoryHost::new().with_attribute("level", "5"));
    el.attach();
    assert_eq!(el.value("level"), Some(&Value::Number(5.0)));

    external_set(&mut el, "level", None).unwrap();

    assert_eq!(el.value("level"), Some(&Value::Number(0.0)));
    assert!(!el.host().has_attribute("level"));
    assert_eq!(last_frame(&el), "count=0 active=false header= level=0");
}

#[test]
fn unchanged_value_after_coercion_is_a_no_op() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();

    external_set(&mut el, "level", Some("5")).unwrap();
    external_set(&mut el, "active", Some("")).unwrap();
    let before = renders(&el);
    let entries = log.borrow().len();

    external_set(&mut el, "level", Some("5.0")).unwrap();
    external_set(&mut el, "level", Some(" 5 ")).unwrap();
    external_set(&mut el, "active", Some("yes")).unwrap();

    assert_eq!(renders(&el), before);
    assert_eq!(log.borrow().len(), entries);
    assert_eq!(el.value("level"), Some(&Value::Number(5.0)));
}

// =============================================================================
// Notification
// =============================================================================

#[test]
fn observer_runs_before_the_render_of_the_same_change() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    log.borrow_mut().clear();

    let count = el.schema().property::<f64>("count").unwrap();
    el.set(count, 1.0).unwrap();
    el.set(count, 2.0).unwrap();

    assert_eq!(
        *log.borrow(),
        [
            "observe:count=1",
            "render:count=1 active=false header= level=0",
            "observe:count=2",
            "render:count=2 active=false header= level=0",
        ]
    );
}

#[test]
fn every_write_after_attach_renders() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    for n in 1..=5 {
        el.set_value("count", n).unwrap();
    }
    el.set_value("note", "plain").unwrap();
    assert_eq!(renders(&el), 7);
}

#[test]
fn batch_renders_once_but_observes_every_change() {
    let (mut el, log, _) = widget(MemoryHost::new());
    el.attach();
    log.borrow_mut().clear();
    let count = el.schema().property::<f64>("count").unwrap();

    el.batch(|el| {
        el.set(count, 1.0).unwrap();
        el.batch(|el| el.set(count, 2.0).unwrap());
        el.set_value("active", true).unwrap();
    });

    assert_eq!(
        *log.borrow(),
        [
            "observe:count=1",
            "observe:count=2",
            "observe:active=true",
            "render:count=2 active=true header= level=0",
        ]
    );
}

#[test]
fn empty_batch_does_not_render() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    let n = el.batch(|_| 7);
    assert_eq!(n, 7);
    assert_eq!(renders(&el), 1);
}

#[test]
fn undeclared_names_are_inert() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    el.set_value("scratch", 1).unwrap();
    assert_eq!(el.value("scratch"), Some(&Value::Number(1.0)));
    assert_eq!(el.props().value("scratch"), Some(&Value::Number(1.0)));
    assert_eq!(renders(&el), 1);
}

// =============================================================================
// Scoped lookup
// =============================================================================

#[test]
fn by_id_is_rebuilt_on_each_access() {
    let (mut el, _, _) = widget(MemoryHost::new());
    el.attach();
    let first = el.by_id();
    assert_eq!(first.get("title"), Some(&1));
    assert_eq!(first.get("body"), Some(&10));

    el.set_value("count", 1).unwrap();
    let second = el.by_id();
    assert_eq!(second.get("title"), Some(&2));
    assert_eq!(first.get("title"), Some(&1));
}

// =============================================================================
// Diagnostics and coercion failures
// =============================================================================

struct Dial {
    log: Log,
}

impl Logged for Dial {
    fn log(&self) -> &Log {
        &self.log
    }
}

impl Component for Dial {
    type Renderer = Recorder;

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.register::<f64>(
            "level",
            PropertyDescriptor::custom(|raw| match raw {
                None => Ok(Value::Null),
                Some("low") => Ok(Value::Number(1.0)),
                Some("high") => Ok(Value::Number(2.0)),
                Some(other) => Err(format!("unknown level {other:?}")),
            })
            .reflect_to_attribute(true),
        );
        schema.register::<Vec<Value>>(
            "items",
            PropertyDescriptor::array().reflect_to_attribute(true),
        );
        schema.register::<String>(
            "mode",
            PropertyDescriptor::string().observer("mode_changed"),
        );
        schema
    }

    fn render(&self, props: &Props<'_>) -> String {
        format!("level={}", show(props.value("level")))
    }
}

fn dial(host: MemoryHost) -> (Element<Dial>, RecordingDiagnostics) {
    let log = Log::default();
    let diagnostics = RecordingDiagnostics::new();
    let el = Definition::<Dial>::new()
        .construct(
            Dial { log: log.clone() },
            host,
            Recorder { log },
            Frames::default(),
        )
        .with_diagnostics(diagnostics.clone());
    (el, diagnostics)
}

#[test]
fn configuration_problems_warn_and_continue() {
    let (mut el, diagnostics) = dial(MemoryHost::new());
    el.attach();

    assert_eq!(
        diagnostics.warnings(),
        [
            Warning::RichReflection {
                property: "items",
                ty: "Array",
            },
            Warning::MissingObserver {
                property: "mode",
                observer: "mode_changed",
            },
        ]
    );

    let items = el.schema().property::<Vec<Value>>("items").unwrap();
    el.set(items, vec![Value::from(1), Value::from(2)]).unwrap();
    assert_eq!(el.get(items), Some(vec![Value::from(1), Value::from(2)]));
    assert!(!el.host().has_attribute("items"));

    el.set_value("mode", "edit").unwrap();
    assert_eq!(el.value("mode"), Some(&Value::from("edit")));
}

#[test]
fn rejected_attribute_keeps_the_previous_value() {
    let (mut el, diagnostics) = dial(MemoryHost::new().with_attribute("level", "low"));
    el.attach();
    diagnostics.clear();
    let before = renders(&el);

    let err = external_set(&mut el, "level", Some("max")).unwrap_err();

    assert_eq!(err.property, "level");
    assert_eq!(err.raw.as_deref(), Some("max"));
    assert_eq!(el.value("level"), Some(&Value::Number(1.0)));
    assert_eq!(renders(&el), before);
    assert!(matches!(
        diagnostics.warnings().as_slice(),
        [Warning::CoercionRejected { property: "level", .. }]
    ));
}

#[test]
fn rejected_write_restores_the_attribute() {
    let (mut el, _) = dial(MemoryHost::new().with_attribute("level", "high"));
    el.attach();

    assert!(el.set_value("level", "max").is_err());
    assert_eq!(el.host().get_attribute("level").as_deref(), Some("high"));
    assert_eq!(el.value("level"), Some(&Value::Number(2.0)));

    el.set_value("level", "low").unwrap();
    assert_eq!(el.value("level"), Some(&Value::Number(1.0)));
}

#[test]
fn rejected_markup_is_reported_during_attach() {
    let (mut el, diagnostics) = dial(MemoryHost::new().with_attribute("level", "max"));
    el.attach();

    assert_eq!(el.value("level"), None);
    assert_eq!(renders(&el), 1);
    assert!(
        diagnostics
            .warnings()
            .iter()
            .any(|w| matches!(w, Warning::CoercionRejected { property: "level", .. }))
    );
}

// =============================================================================
// Defaults and render batching during attach
// =============================================================================

static FACTORY_CALLS: AtomicUsize = AtomicUsize::new(0);

struct Tagged {
    log: Log,
}

impl Logged for Tagged {
    fn log(&self) -> &Log {
        &self.log
    }
}

impl Component for Tagged {
    type Renderer = Recorder;

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.register::<Vec<Value>>(
            "tags",
            PropertyDescriptor::array().value_with(|| {
                FACTORY_CALLS.fetch_add(1, Ordering::SeqCst);
                Value::Array(vec![Value::from("new")])
            }),
        );
        schema.register::<f64>("width", PropertyDescriptor::number().value(10));
        schema.register::<f64>("height", PropertyDescriptor::number().value(20));
        schema.register::<bool>(
            "wide",
            PropertyDescriptor::boolean()
                .reflect_to_attribute(true)
                .value(true),
        );
        schema
    }

    fn render(&self, props: &Props<'_>) -> String {
        format!(
            "{}x{} wide={}",
            show(props.value("width")),
            show(props.value("height")),
            show(props.value("wide"))
        )
    }
}

#[test]
fn defaults_are_applied_once_with_one_render() {
    let log = Log::default();
    let mut el = Definition::<Tagged>::new().construct(
        Tagged { log: log.clone() },
        MemoryHost::new(),
        Recorder { log: log.clone() },
        Frames::default(),
    );
    el.attach();

    assert_eq!(FACTORY_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(el.root().frames, ["10x20 wide=true"]);
    assert!(el.host().has_attribute("wide"));

    el.set_value("width", 11).unwrap();
    el.set_value("height", 21).unwrap();
    assert_eq!(FACTORY_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(renders(&el), 3);
    assert!(el.component().log().borrow().len() >= 3);
}

// =============================================================================
// Observers that write
// =============================================================================

struct Chain {
    log: Log,
}

impl Logged for Chain {
    fn log(&self) -> &Log {
        &self.log
    }
}

impl Component for Chain {
    type Renderer = Recorder;

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.register::<f64>("a", PropertyDescriptor::number().observer("a_changed"));
        schema.register::<f64>("b", PropertyDescriptor::number());
        schema
    }

    fn observer(name: &str) -> Option<Observer<Self>> {
        (name == "a_changed").then_some(a_changed as Observer<Self>)
    }

    fn render(&self, props: &Props<'_>) -> String {
        format!("a={} b={}", show(props.value("a")), show(props.value("b")))
    }
}

fn a_changed(el: &mut Element<Chain>, value: &Value) {
    record(el, format!("observe:a={}", show(Some(value))));
    let doubled = value.as_number().map(|n| n * 2.0);
    el.set_value("b", doubled).unwrap();
}

#[test]
fn writes_from_an_observer_render_independently() {
    let log = Log::default();
    let mut el = Definition::<Chain>::new().construct(
        Chain { log: log.clone() },
        MemoryHost::new(),
        Recorder { log: log.clone() },
        Frames::default(),
    );
    el.attach();
    log.borrow_mut().clear();

    el.set_value("a", 2).unwrap();

    assert_eq!(
        *log.borrow(),
        ["observe:a=2", "render:a=2 b=4", "render:a=2 b=4"]
    );
}

// =============================================================================
// Placeholder template
// =============================================================================

struct Blank;

impl Component for Blank {
    type Renderer = Recorder;

    fn schema() -> Schema {
        Schema::new()
    }
}

#[test]
fn default_render_paints_the_placeholder() {
    let log = Log::default();
    let mut el = Definition::<Blank>::new().construct(
        Blank,
        MemoryHost::new(),
        Recorder { log },
        Frames::default(),
    );
    el.attach();
    assert_eq!(el.root().frames, [PLACEHOLDER_TEMPLATE]);
    assert!(el.is_attached());
}
