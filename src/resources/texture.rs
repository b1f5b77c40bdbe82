use std::borrow::Cow;

use uuid::Uuid;

/// A named texture asset.
///
/// Only the identity of a texture matters to the scene graph; pixel data,
/// decoding, and caching live with the renderer. Like [`Material`],
/// textures are compared by identity, not by value.
///
/// [`Material`]: crate::resources::material::Material
#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub name: Option<Cow<'static, str>>,
}

impl Texture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::new()
    }
}
