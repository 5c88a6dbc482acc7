use glint_analysis_globals::GlobalsAnalyzer;
use glint_lang_c::CTranslationUnit;
use pretty_assertions::assert_eq;
use std::path::Path;

fn analyze(path: &str, source: &str) -> glint_analysis_globals::Report {
    let unit = CTranslationUnit::parse(Path::new(path), source).unwrap();
    GlobalsAnalyzer::analyze(&unit).unwrap()
}

#[test]
fn confined_global_is_reported() {
    let source = "\
int counter = 0;

void increment(void) {
    counter = counter + 1;
}
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.variable, "counter");
    assert_eq!(finding.location.line, 1);
    assert_eq!(finding.sole_function, "increment");
    assert_eq!(
        finding.message(),
        "Bad Implementation of Global Variable 'counter' Found in 'increment'"
    );
}

#[test]
fn shared_global_is_not_reported() {
    let source = "\
int counter = 0;

void increment(void) {
    counter = counter + 1;
}

void reset(void) {
    counter = 0;
}
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 0);
    assert_eq!(report.stats.globals_tracked, 1);
}

#[test]
fn mixed_globals_report_only_the_confined_one() {
    let source = "\
int counter = 0;
int shared = 0;

void increment(void) {
    counter = counter + 1;
    shared++;
}

void reset(void) {
    shared = 0;
}
";
    let report = analyze("main.c", source);

    let names: Vec<&str> = report.findings.iter().map(|f| f.variable.as_str()).collect();
    assert_eq!(names, vec!["counter"]);
}

#[test]
fn header_unit_yields_nothing() {
    let source = "\
static int flag;

void poll(void) {
    flag = 1;
}
";
    let report = analyze("utils.h", source);

    assert_eq!(report.stats.globals_tracked, 0);
    assert_eq!(report.findings.len(), 0);
}

#[test]
fn unreferenced_global_is_silent() {
    let source = "int x;\n\nint main(void) {\n    return 0;\n}\n";
    let report = analyze("main.c", source);

    assert_eq!(report.stats.globals_tracked, 1);
    assert_eq!(report.findings.len(), 0);
}

#[test]
fn locals_shadowing_a_global_do_not_count_as_uses() {
    let source = "\
int value = 0;

void compute(void) {
    int value = 4;
    value = value * 2;
}
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 0);
    assert_eq!(report.stats.references_resolved, 0);
}

#[test]
fn extern_declared_global_resolves_before_its_definition() {
    let source = "\
extern int total;

void bump(void) {
    total++;
}

int total = 0;
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].variable, "total");
    assert_eq!(report.findings[0].sole_function, "bump");
}

#[test]
fn static_local_confined_to_its_function_is_reported() {
    // Explicit `static` gives the local program lifetime, so it enters the
    // analysis like any other static-storage variable.
    let source = "\
void count(void) {
    static int calls = 0;
    calls++;
}
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].variable, "calls");
    assert_eq!(report.findings[0].sole_function, "count");
}

#[test]
fn file_scope_initializer_references_are_dropped() {
    let source = "\
int base = 3;
int derived = base + 1;
";
    let report = analyze("main.c", source);

    assert_eq!(report.findings.len(), 0);
    assert_eq!(report.stats.references_dropped, 1);
}

#[test]
fn repeated_uses_in_one_function_still_count_once() {
    let source = "\
int hits = 0;

void record(void) {
    hits++;
    hits++;
    hits++;
}
";
    let report = analyze("main.c", source);

    assert_eq!(report.stats.references_resolved, 3);
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn unparsable_bytes_still_produce_a_tree() {
    // tree-sitter recovers from errors; the analysis sees whatever
    // declarations survived.
    let source = "int ok = 1;\n@@@@\nvoid f(void) { ok++; }\n";
    let unit = CTranslationUnit::parse(Path::new("main.c"), source).unwrap();
    let report = GlobalsAnalyzer::analyze(&unit).unwrap();
    assert_eq!(report.stats.globals_tracked, 1);
}
