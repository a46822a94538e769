use super::*;

pub(crate) struct Context<'a> {
  fragment: &'a mut Fragment,
  options: &'a CleanerOptions,
}

impl<'a> Context<'a> {
  pub(crate) fn fragment_mut(&mut self) -> &mut Fragment {
    &mut *self.fragment
  }

  pub(crate) fn new(
    fragment: &'a mut Fragment,
    options: &'a CleanerOptions,
  ) -> Self {
    Self { fragment, options }
  }

  pub(crate) fn options(&self) -> &CleanerOptions {
    self.options
  }
}
