//! HTTP clients for the external collaborators: the Gerrit code-review
//! system (tag URLs), the Artifactory artifact store (delivery metadata)
//! and the CarWeaver component registry (component/module refresh).

mod artifactory;
mod carweaver;
mod gerrit;

pub use artifactory::ArtifactoryClient;
pub use carweaver::CarWeaverClient;
pub use gerrit::GerritClient;
