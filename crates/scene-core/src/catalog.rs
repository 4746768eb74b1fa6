//! Static list of the models the viewer can show.

use glam::Vec3;

/// Identifier of the synthetic text entry. It never refers to a loadable asset.
pub const TEXT_MODEL_ID: &str = "text";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    Mesh,
    Text,
}

/// Immutable description of one selectable model.
///
/// For meshes `id` doubles as the asset reference handed to the loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub base_scale: f32,
    pub position: [f32; 3],
    pub kind: ModelKind,
}

impl ModelDescriptor {
    pub fn position_vec3(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ModelKind::Mesh
    }
}

pub const MODELS: [ModelDescriptor; 2] = [
    ModelDescriptor {
        id: "/xensilico-titlt.glb",
        name: "Logo",
        base_scale: 0.8,
        position: [0.0, -0.2, 0.0],
        kind: ModelKind::Mesh,
    },
    ModelDescriptor {
        id: TEXT_MODEL_ID,
        name: "Text",
        base_scale: 1.0,
        position: [0.0, 0.0, 0.0],
        kind: ModelKind::Text,
    },
];

#[inline]
pub fn find_model(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|m| m.id == id)
}

/// Whether `id` names something the mesh loader could have cached.
///
/// Unknown identifiers are treated as raw asset references.
#[inline]
pub fn is_loadable_asset(id: &str) -> bool {
    match find_model(id) {
        Some(m) => m.is_mesh(),
        None => id != TEXT_MODEL_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_mesh_and_one_text_entry() {
        assert_eq!(MODELS.len(), 2);
        assert_eq!(MODELS[0].kind, ModelKind::Mesh);
        assert_eq!(MODELS[1].kind, ModelKind::Text);
        assert_eq!(MODELS[1].id, TEXT_MODEL_ID);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(MODELS[0].id, MODELS[1].id);
    }

    #[test]
    fn loadable_asset_classification() {
        assert!(is_loadable_asset("/xensilico-titlt.glb"));
        assert!(!is_loadable_asset(TEXT_MODEL_ID));
        assert!(is_loadable_asset("/some-other.glb"));
    }
}
