use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{EquicubeError, EquicubeResult};
use crate::projection::orientation::FaceId;
use crate::projection::params::ProjectionParams;
use crate::render::dispatch::CubemapStats;
use crate::render::face::FaceImage;

/// Six cube faces in canonical order, produced atomically by one conversion.
#[derive(Clone, Debug)]
pub struct Cubemap {
    faces: [FaceImage; 6],
    params: ProjectionParams,
    stats: CubemapStats,
}

impl Cubemap {
    pub(crate) fn new(faces: [FaceImage; 6], params: ProjectionParams, stats: CubemapStats) -> Self {
        Self {
            faces,
            params,
            stats,
        }
    }

    /// Borrow one face.
    pub fn face(&self, id: FaceId) -> &FaceImage {
        &self.faces[id.index()]
    }

    /// All faces in canonical order `front, right, back, left, top, bottom`.
    pub fn faces(&self) -> &[FaceImage; 6] {
        &self.faces
    }

    /// Take ownership of the faces in canonical order.
    pub fn into_faces(self) -> [FaceImage; 6] {
        self.faces
    }

    /// Parameters the faces were rendered with.
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Width and height of every face.
    pub fn face_size(&self) -> u32 {
        self.params.face_size
    }

    /// Field of view of every face in degrees, for the skybox renderer.
    pub fn field_of_view_degrees(&self) -> f64 {
        self.params.field_of_view_degrees()
    }

    /// Run diagnostics.
    pub fn stats(&self) -> CubemapStats {
        self.stats
    }

    /// Lay the faces out as a horizontal cross, 4 faces wide and 3 high:
    ///
    /// ```text
    /// +------+
    /// | top  |
    /// +------+------+------+------+
    /// |front |right | back | left |
    /// +------+------+------+------+
    /// |bottom|
    /// +------+
    /// ```
    ///
    /// Empty cells are transparent.
    pub fn to_cross_atlas(&self) -> EquicubeResult<FaceImage> {
        let s = self.face_size();
        let width = s
            .checked_mul(4)
            .ok_or_else(|| EquicubeError::validation("cross atlas width overflows u32"))?;
        let height = s
            .checked_mul(3)
            .ok_or_else(|| EquicubeError::validation("cross atlas height overflows u32"))?;
        let mut atlas = FaceImage::try_alloc(width, height)
            .map_err(|fault| EquicubeError::validation(format!("cross atlas: {fault}")))?;

        for face in FaceId::ALL {
            let (col, row) = cross_cell(face);
            blit(&mut atlas, self.face(face), col * s, row * s);
        }
        Ok(atlas)
    }

    /// Write each face as `<dir>/<stem>_<face>.png` and return the paths in canonical order.
    pub fn save_faces(&self, dir: impl AsRef<Path>, stem: &str) -> EquicubeResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;

        let mut paths = Vec::with_capacity(FaceId::ALL.len());
        for face in FaceId::ALL {
            let path = dir.join(format!("{stem}_{}.png", face.name()));
            save_png(self.face(face), &path)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

/// Write one RGBA8 image as PNG.
pub fn save_png(img: &FaceImage, path: &Path) -> EquicubeResult<()> {
    image::save_buffer_with_format(
        path,
        &img.data,
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// `(column, row)` of a face in the cross atlas.
fn cross_cell(face: FaceId) -> (u32, u32) {
    match face {
        FaceId::Front => (0, 1),
        FaceId::Right => (1, 1),
        FaceId::Back => (2, 1),
        FaceId::Left => (3, 1),
        FaceId::Top => (0, 0),
        FaceId::Bottom => (0, 2),
    }
}

fn blit(dst: &mut FaceImage, src: &FaceImage, x0: u32, y0: u32) {
    let src_stride = src.width as usize * 4;
    let dst_stride = dst.width as usize * 4;
    for (y, row) in src.data.chunks_exact(src_stride).enumerate() {
        let start = (y0 as usize + y) * dst_stride + x0 as usize * 4;
        dst.data[start..start + src_stride].copy_from_slice(row);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cubemap.rs"]
mod tests;
