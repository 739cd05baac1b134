//! Shared state handed to every route

use std::path::Path;
use std::sync::Arc;

use fforge_gen::ProjectBuilder;

pub struct ServerState<G> {
    pub generator: Arc<G>,
    pub builder: Arc<ProjectBuilder>,
}

impl<G> ServerState<G> {
    pub fn new(generator: G, builder: ProjectBuilder) -> Self {
        Self {
            generator: Arc::new(generator),
            builder: Arc::new(builder),
        }
    }

    /// Root the published previews are served from
    pub fn public_dir(&self) -> &Path {
        self.builder.public_dir()
    }
}

// Manual impl: `G` itself need not be Clone
impl<G> Clone for ServerState<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            builder: Arc::clone(&self.builder),
        }
    }
}
