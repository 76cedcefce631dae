use std::borrow::Cow;

use tinypack_common::{ModuleId, SourceJoiner};
use tinypack_utils::{concat_string, ecmascript::computed_member_str};

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn region_label(id: &str) -> Cow<'_, str> {
  if id.contains(LINE_TERMINATORS) {
    Cow::Owned(id.replace(LINE_TERMINATORS, " "))
  } else {
    Cow::Borrowed(id)
  }
}

/// Appends the module unit of a retained module. The body only sees `exports` and `require`.
pub fn render_module<'a>(source_joiner: &mut SourceJoiner<'a>, id: &ModuleId, body: &'a str) {
  source_joiner.append_source(concat_string!("//#region ", region_label(id)));
  source_joiner.append_source(concat_string!(
    computed_member_str("__modules", id),
    " = function (exports, require) {"
  ));
  let body = body.trim_end();
  if !body.is_empty() {
    source_joiner.append_source(body);
  }
  source_joiner.append_source("};");
  source_joiner.append_source("//#endregion");
}

/// Appends an empty unit for a pruned module that a retained module still requires, so the
/// require resolves to an empty exports record instead of throwing.
pub fn render_pruned_module(source_joiner: &mut SourceJoiner<'_>, id: &ModuleId) {
  source_joiner.append_source(concat_string!("//#region ", region_label(id), " (pruned)"));
  source_joiner.append_source(concat_string!(computed_member_str("__modules", id), " = function () {};"));
  source_joiner.append_source("//#endregion");
}
