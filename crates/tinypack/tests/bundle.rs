use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tinypack::{
  BuildDiagnostic, BuildStage, BuildState, BundleOutput, Bundler, BundlerOptions, ModuleDescriptor,
  ModuleId, SharedTransformer, Transformer,
};

/// Passes sources through unchanged and records every call.
#[derive(Debug, Default)]
struct Recording {
  calls: Mutex<Vec<String>>,
}

impl Recording {
  fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }
}

impl Transformer for Recording {
  fn name(&self) -> &'static str {
    "recording"
  }

  fn transform(&self, source: &str, module_id: &ModuleId) -> anyhow::Result<String> {
    self.calls.lock().unwrap().push(module_id.to_string());
    if source.contains("@fail") {
      anyhow::bail!("refusing to transform");
    }
    Ok(source.to_string())
  }
}

fn bundler(options: BundlerOptions) -> (Bundler, Arc<Recording>) {
  let recording = Arc::new(Recording::default());
  let transformer: SharedTransformer = Arc::clone(&recording) as SharedTransformer;
  (Bundler::with_transformer(options, transformer), recording)
}

fn calculator() -> Vec<ModuleDescriptor> {
  vec![
    ModuleDescriptor::new(
      "utils",
      "exports.add = function (a, b) { return a + b; };\n\
       exports.multiply = function (a, b) { return a * b; };\n\
       exports.unusedFunction = function () { return 'unused'; };",
    )
    .with_exports(["add", "multiply", "unusedFunction"]),
    ModuleDescriptor::new(
      "math",
      "var utils = require(\"utils\");\n\
       exports.calculate = function (a, b) { return utils.multiply(utils.add(a, b), 2); };\n\
       exports.unusedMath = function () { return 0; };",
    )
    .with_dependencies(["utils"])
    .with_exports(["calculate", "unusedMath"])
    .with_references("utils", ["add", "multiply"]),
    ModuleDescriptor::new("main", "var math = require(\"math\");\nexports.result = math.calculate(5, 3);")
      .with_dependencies(["math"])
      .with_exports(["result"])
      .with_references("math", ["calculate"]),
  ]
}

fn retained(output: &BundleOutput) -> Vec<&str> {
  output.artifact.retained_order.iter().map(|id| &**id).collect()
}

#[test]
fn calculator_bundle() {
  let (mut bundler, _) = bundler(BundlerOptions {
    used_exports: Some(vec!["result".to_string()]),
    ..Default::default()
  });
  let output = bundler.generate(calculator()).unwrap();

  assert_eq!(retained(&output), ["utils", "math", "main"]);
  let used = output
    .used_exports
    .iter()
    .map(|(id, names)| (id.to_string(), names.iter().map(ToString::to_string).collect::<Vec<_>>()))
    .collect::<Vec<_>>();
  assert_eq!(
    used,
    [
      ("utils".to_string(), vec!["add".to_string(), "multiply".to_string()]),
      ("math".to_string(), vec!["calculate".to_string()]),
      ("main".to_string(), vec!["result".to_string()]),
    ]
  );
  assert!(output.warnings.is_empty());
  assert_eq!(bundler.state(), BuildState::Done);

  let code = &output.artifact.code;
  let units = ["utils", "math", "main"]
    .map(|id| code.find(&format!("__modules[\"{id}\"] = function (exports, require) {{")).unwrap());
  assert!(units[0] < units[1] && units[1] < units[2]);
  assert_eq!(output.assets[0].filename, "bundle.js");
  assert_eq!(output.assets[0].content, *code);
}

#[test]
fn entry_is_required_once_as_the_final_statement() {
  let (mut bundler, _) = bundler(BundlerOptions::default());
  let code = bundler.generate(calculator()).unwrap().artifact.code;

  assert_eq!(code.matches("requireModule(\"main\")").count(), 1);
  assert!(code.ends_with("requireModule(\"main\");\n})();"));
  assert!(code.starts_with("(function () {\n"));
}

#[test]
fn loader_caches_exports_before_running_the_body() {
  let (mut bundler, _) = bundler(BundlerOptions::default());
  let code = bundler.generate(calculator()).unwrap().artifact.code;

  let lookup = code.find("if (id in __cache)").unwrap();
  let placeholder = code.find("__cache[id] = exports;").unwrap();
  let execute = code.find("__modules[id].call(exports, exports, requireModule);").unwrap();
  assert!(lookup < placeholder && placeholder < execute);
  assert_eq!(code.matches("function requireModule(id)").count(), 1);
  assert!(code.contains("throw new Error(\"Cannot find module \" + JSON.stringify(id));"));
}

#[test]
fn pruned_dependency_becomes_an_empty_unit() {
  let (mut bundler, recording) = bundler(BundlerOptions::default());
  let output = bundler
    .generate(vec![
      ModuleDescriptor::new("main", "var a = require(\"a\"); require(\"b\"); a.x();")
        .with_dependencies(["a", "b"])
        .with_references("a", ["x"]),
      ModuleDescriptor::new("a", "exports.x = function () {};").with_exports(["x"]),
      ModuleDescriptor::new("b", "exports.y = 1;").with_exports(["y"]),
    ])
    .unwrap();

  assert_eq!(retained(&output), ["a", "main"]);
  assert_eq!(output.artifact.pruned_dependencies, vec![ModuleId::new("b")]);
  assert!(!output.artifact.is_retained("b"));
  assert!(output.artifact.code.contains("//#region b (pruned)\n__modules[\"b\"] = function () {};"));
  assert!(!output.artifact.code.contains("exports.y = 1;"));
  assert_eq!(recording.calls(), ["a", "main"]);
}

#[test]
fn side_effects_survive_without_used_exports() {
  let (mut bundler, _) = bundler(BundlerOptions::default());
  let output = bundler
    .generate(vec![
      ModuleDescriptor::new("main", "require(\"polyfill\");").with_dependencies(["polyfill"]),
      ModuleDescriptor::new("polyfill", "globalThis.ready = true;")
        .with_exports(["unused"])
        .with_side_effects(true),
    ])
    .unwrap();

  assert_eq!(retained(&output), ["polyfill", "main"]);
  assert!(output.artifact.code.contains("globalThis.ready = true;"));
}

#[test]
fn transform_runs_once_per_retained_module() {
  let (mut bundler, recording) = bundler(BundlerOptions::default());
  bundler
    .generate(vec![
      ModuleDescriptor::new("main", "")
        .with_dependencies(["left", "right"])
        .with_references("left", ["l"])
        .with_references("right", ["r"]),
      ModuleDescriptor::new("left", "")
        .with_dependencies(["shared"])
        .with_exports(["l"])
        .with_references("shared", ["s"]),
      ModuleDescriptor::new("right", "")
        .with_dependencies(["shared"])
        .with_exports(["r"])
        .with_references("shared", ["s"]),
      ModuleDescriptor::new("shared", "").with_exports(["s"]),
    ])
    .unwrap();

  assert_eq!(recording.calls(), ["shared", "left", "right", "main"]);
}

#[test]
fn transform_failure_aborts_in_emitting() {
  let (mut bundler, _) = bundler(BundlerOptions::default());
  let mut modules = calculator();
  modules[1].source.push_str("\n// @fail");

  let err = bundler.generate(modules).unwrap_err();
  assert_eq!(err.stage, BuildStage::Emitting);
  assert_eq!(
    err.diagnostic,
    BuildDiagnostic::Transform { id: "math".into(), reason: "refusing to transform".to_string() }
  );
  assert_eq!(bundler.state(), BuildState::Failed(BuildStage::Emitting));
}

#[test]
fn failures_report_their_stage() {
  let (mut bundler, _) = bundler(BundlerOptions::default());

  let err = bundler
    .generate(vec![ModuleDescriptor::new("main", ""), ModuleDescriptor::new("main", "")])
    .unwrap_err();
  assert_eq!(err.stage, BuildStage::Registering);
  assert_eq!(err.diagnostic, BuildDiagnostic::DuplicateModule { id: "main".into() });
  assert_eq!(bundler.state(), BuildState::Failed(BuildStage::Registering));

  let err = bundler
    .generate(vec![
      ModuleDescriptor::new("main", "").with_dependencies(["A"]),
      ModuleDescriptor::new("A", "").with_dependencies(["B"]),
      ModuleDescriptor::new("B", "").with_dependencies(["A"]),
    ])
    .unwrap_err();
  assert_eq!(err.stage, BuildStage::Resolving);
  assert_eq!(
    err.diagnostic,
    BuildDiagnostic::CircularDependency { path: vec!["A".into(), "B".into(), "A".into()] }
  );

  let err = bundler
    .generate(vec![ModuleDescriptor::new("main", "").with_dependencies(["B"])])
    .unwrap_err();
  assert_eq!(
    err.diagnostic,
    BuildDiagnostic::UnresolvedDependency { specifier: "B".into(), importer: "main".into() }
  );

  let err = bundler.generate(vec![ModuleDescriptor::new("app", "")]).unwrap_err();
  assert_eq!(err.stage, BuildStage::Resolving);
  assert_eq!(err.diagnostic, BuildDiagnostic::UnresolvedModule { id: "main".into() });
  assert_eq!(err.to_string(), "[UNRESOLVED_MODULE] Module \"main\" is not registered (while resolving)");

  // A terminal state accepts the next build.
  bundler.generate(calculator()).unwrap();
  assert_eq!(bundler.state(), BuildState::Done);
}

#[test]
fn state_starts_idle() {
  let bundler = Bundler::new(BundlerOptions::default());
  assert_eq!(bundler.state(), BuildState::Idle);
  assert!(!bundler.state().is_running());
}

#[test]
fn builds_are_deterministic() {
  let (mut first, _) = bundler(BundlerOptions::default());
  let (mut second, _) = bundler(BundlerOptions::default());
  let a = first.generate(calculator()).unwrap();
  let b = second.generate(calculator()).unwrap();
  assert_eq!(a.artifact.code, b.artifact.code);
  assert_eq!(a.used_exports, b.used_exports);
}

#[test]
fn link_warnings_are_reported() {
  let (mut bundler, _) = bundler(BundlerOptions {
    used_exports: Some(vec!["missing".to_string()]),
    ..Default::default()
  });
  let output = bundler
    .generate(vec![
      ModuleDescriptor::new("main", "")
        .with_dependencies(["lib"])
        .with_references("lib", ["ghost"]),
      ModuleDescriptor::new("lib", "").with_exports(["real"]),
    ])
    .unwrap();

  assert_eq!(
    output.warnings,
    vec![
      BuildDiagnostic::MissingEntryExport { entry: "main".into(), name: "missing".into() },
      BuildDiagnostic::MissingExport {
        importer: "main".into(),
        importee: "lib".into(),
        name: "ghost".into()
      },
    ]
  );
  assert!(output.warnings.iter().all(BuildDiagnostic::is_warning));
  assert_eq!(retained(&output), ["main"]);
}

#[test]
fn disabled_tree_shaking_keeps_every_reachable_module() {
  let (mut bundler, _) = bundler(BundlerOptions { tree_shake: Some(false), ..Default::default() });
  let mut modules = calculator();
  modules.push(ModuleDescriptor::new("orphan", "exports.o = 1;").with_exports(["o"]));
  let output = bundler.generate(modules).unwrap();

  assert_eq!(retained(&output), ["utils", "math", "main"]);
  assert!(output.used_exports.is_used("utils", "unusedFunction"));
  assert!(output.artifact.pruned_dependencies.is_empty());
}

#[test]
fn lint_reports_on_retained_modules_only() {
  let (bundler, _) = bundler(BundlerOptions { lint: Some(true), ..Default::default() });
  let mut bundler = bundler.with_linter(Arc::new(tinypack::BuiltinLinter::default()));
  let output = bundler
    .generate(vec![
      ModuleDescriptor::new("main", "var unused = 1;\nrequire(\"dead\");").with_dependencies(["dead"]),
      ModuleDescriptor::new("dead", "var alsoUnused = 2;"),
    ])
    .unwrap();

  let rendered = output.diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>();
  assert_eq!(rendered, ["ERROR: 'unused' is defined but never used (no-unused-vars)"]);
  assert_eq!(&*output.diagnostics[0].module_id, "main");
}

#[test]
fn lint_is_off_by_default() {
  let (mut bundler, _) = bundler(BundlerOptions::default());
  let output = bundler.generate(vec![ModuleDescriptor::new("main", "var unused = 1;")]).unwrap();
  assert!(output.diagnostics.is_empty());
}

#[test]
fn default_transformer_reprints_and_minifies() {
  let mut bundler = Bundler::new(BundlerOptions { minify: Some(true), ..Default::default() });
  let output = bundler.generate(calculator()).unwrap();
  let body = &output.artifact.module_bodies["utils"];
  assert!(body.contains("exports.add"));
  assert!(!body.contains("  "));

  let mut bundler = Bundler::new(BundlerOptions::default());
  let err = bundler
    .generate(vec![ModuleDescriptor::new("main", "exports.broken = (;")])
    .unwrap_err();
  assert_eq!(err.stage, BuildStage::Emitting);
  assert!(matches!(err.diagnostic, BuildDiagnostic::Transform { ref id, .. } if id == "main"));
}

#[test]
fn named_bundle_gets_a_banner() {
  let (mut bundler, _) = bundler(BundlerOptions {
    name: Some("calculator".to_string()),
    ..Default::default()
  });
  let code = bundler.generate(calculator()).unwrap().artifact.code;
  assert!(code.starts_with("// calculator\n(function () {"));
}

#[test]
fn write_emits_the_bundle_file() {
  let dir = std::env::temp_dir().join(format!("tinypack-write-{}", std::process::id()));
  let (mut bundler, _) = bundler(BundlerOptions {
    dir: Some(dir.to_string_lossy().into_owned()),
    file: Some("calc.js".to_string()),
    ..Default::default()
  });
  let output = bundler.write(calculator()).unwrap();

  let written = std::fs::read_to_string(dir.join("calc.js")).unwrap();
  assert_eq!(written, output.artifact.code);
  std::fs::remove_dir_all(dir).unwrap();
}
