use super::source::Source;

/// Concatenates sources, one per line.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn join(&self) -> String {
    if self.inner.is_empty() {
      return String::new();
    }

    let size_hint_of_ret_source = self.inner.iter().map(|source| source.content().len()).sum::<usize>()
      + /* Each source we will emit a '\n' but exclude last one */ (self.inner.len() - 1);
    let mut ret_source = String::with_capacity(size_hint_of_ret_source);

    for (index, source) in self.inner.iter().enumerate() {
      if index > 0 {
        ret_source.push('\n');
      }
      ret_source.push_str(source.content());
    }

    ret_source
  }
}

#[test]
fn join_sources() {
  let mut joiner = SourceJoiner::default();
  assert_eq!(joiner.join(), "");
  joiner.append_source("a");
  joiner.append_source(String::from("b"));
  joiner.append_source(arcstr::literal!("c"));
  assert_eq!(joiner.join(), "a\nb\nc");
}
