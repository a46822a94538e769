use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  pub(crate) fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) {
    for stage in &mut self.stages {
      trace!("running stage `{}`", stage.name());
      stage.run(&mut self.context);
    }
  }

  /// Sanitize, demote headings, collapse structure, then normalize links and
  /// images. Later stages rely on the attribute set left by earlier ones.
  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(SanitizeStage));
    pipeline.add_stage(Box::new(NormalizeHeadingsStage));
    pipeline.add_stage(Box::new(CollapseStructureStage));
    pipeline.add_stage(Box::new(NormalizeLinksAndImagesStage));

    pipeline
  }
}
