use itertools::Itertools;
use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  parser::Parser,
  span::SourceType,
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source_text` as a CommonJS module body and prints it back.
  ///
  /// Printing normalizes formatting; with `minify` whitespace and comments are dropped.
  pub fn print(source_text: &str, minify: bool) -> anyhow::Result<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, SourceType::cjs()).parse();
    if ret.panicked || !ret.errors.is_empty() {
      return Err(anyhow::anyhow!("{}", ret.errors.iter().map(ToString::to_string).join("; ")));
    }

    let ret = Codegen::new()
      .with_options(CodegenOptions { minify, ..CodegenOptions::default() })
      .build(&ret.program);

    Ok(ret.code)
  }

  pub fn minify(source_text: &str) -> anyhow::Result<String> {
    Self::print(source_text, true)
  }
}

#[test]
fn basic_test() {
  let code = EcmaCompiler::print("const a = 1;", false).unwrap();
  assert_eq!(code, "const a = 1;\n");
}

#[test]
fn minify_test() {
  let code = EcmaCompiler::minify("const a = 1;\n\nconst b = 2;").unwrap();
  assert!(code.contains("const a=1;"));
  assert!(!code.contains("\n\n"));
}

#[test]
fn syntax_error_is_reported() {
  let err = EcmaCompiler::print("const = ;", false).unwrap_err();
  assert!(!err.to_string().is_empty());
}
