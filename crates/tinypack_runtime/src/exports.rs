use std::{cell::RefCell, rc::Rc};

use arcstr::ArcStr;
use serde_json::Value;
use tinypack_utils::indexmap::FxIndexMap;

/// The exports record of one module instance.
///
/// Cloning shares the record. Every `require` of the same module hands out the same record, so a
/// write made after another module already required it is visible to that module too.
#[derive(Debug, Clone, Default)]
pub struct Exports(Rc<RefCell<FxIndexMap<ArcStr, Value>>>);

impl Exports {
  pub fn set(&self, name: impl Into<ArcStr>, value: impl Into<Value>) {
    self.0.borrow_mut().insert(name.into(), value.into());
  }

  pub fn get(&self, name: &str) -> Option<Value> {
    self.0.borrow().get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.borrow().contains_key(name)
  }

  /// Export names in assignment order.
  pub fn names(&self) -> Vec<ArcStr> {
    self.0.borrow().keys().cloned().collect()
  }

  pub fn len(&self) -> usize {
    self.0.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.borrow().is_empty()
  }

  /// Whether both handles point at the same record.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

#[test]
fn shared_record() {
  let exports = Exports::default();
  let alias = exports.clone();
  alias.set("answer", 42);
  assert_eq!(exports.get("answer"), Some(Value::from(42)));
  assert!(exports.ptr_eq(&alias));
  assert!(!exports.ptr_eq(&Exports::default()));
  assert_eq!(exports.names(), vec![arcstr::literal!("answer")]);
}
