//! OBJ mesh file loading and saving

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Load an OBJ file into a single mesh
pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &load_options()).map_err(|e| match e {
        tobj::LoadError::OpenFileFailed => MeshError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("cannot open {}", path.display()),
        )),
        other => MeshError::ObjParse(other.to_string()),
    })?;
    let mesh = combine_models(&models)?;
    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "loaded OBJ"
    );
    Ok(mesh)
}

/// Read OBJ data from a reader
///
/// Polygons are triangulated and every object in the file is appended to
/// one mesh. Vertices are numbered in order of first use by a face, so
/// vertices no face references are dropped.
pub fn read_obj(reader: &mut impl BufRead) -> MeshResult<Mesh> {
    let (models, _materials) =
        tobj::load_obj_buf(reader, &load_options(), |_| Ok(Default::default()))
            .map_err(|e| MeshError::ObjParse(e.to_string()))?;
    combine_models(&models)
}

fn combine_models(models: &[tobj::Model]) -> MeshResult<Mesh> {
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let vertex_offset = vertices.len() as u32;

        vertices.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64)),
        );
        triangles.extend(
            mesh.indices
                .chunks_exact(3)
                .map(|t| [t[0] + vertex_offset, t[1] + vertex_offset, t[2] + vertex_offset]),
        );
    }

    // tobj yields one empty model for data without faces
    if triangles.is_empty() {
        return Err(MeshError::ObjParse("no faces in OBJ data".to_string()));
    }

    Mesh::from_buffers(vertices, triangles)
}

/// Save a mesh as an OBJ file
pub fn save_obj(path: impl AsRef<Path>, mesh: &Mesh) -> MeshResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, mesh)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as OBJ text: `v` lines, then `f` lines with 1-based ids
pub fn write_obj(writer: &mut impl Write, mesh: &Mesh) -> MeshResult<()> {
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in mesh.triangles() {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cuboid, sphere};
    use approx::assert_relative_eq;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_write_obj_format() {
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::new(0.0, 2.5, 0.0)],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let mut out = Vec::new();
        write_obj(&mut out, &mesh).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "# 3 vertices, 1 triangles",
                "v 0 0 0",
                "v 1 0 0",
                "v 0 2.5 0",
                "f 1 2 3",
            ]
        );
    }

    #[test]
    fn test_read_obj_triangulates_quads() {
        let data = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = read_obj(&mut Cursor::new(data)).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_relative_eq!(mesh.surface_area(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_read_obj_concatenates_objects() {
        let data = "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n\
                    o b\nv 0 0 1\nv 1 0 1\nv 0 1 1\nf 4 5 6\n";
        let mesh = read_obj(&mut Cursor::new(data)).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.vertex(3), DVec3::Z);
    }

    #[test]
    fn test_read_obj_rejects_garbage() {
        let data = "v 0 0 0\nf 1 2 x\n";
        assert!(read_obj(&mut Cursor::new(data)).is_err());
        assert!(matches!(
            read_obj(&mut Cursor::new("")),
            Err(MeshError::ObjParse(_))
        ));
    }

    #[test]
    fn test_read_obj_without_faces() {
        let data = "v 0 0 0\nv 1 0 0\n";
        assert!(matches!(
            read_obj(&mut Cursor::new(data)),
            Err(MeshError::ObjParse(_))
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("box.obj");
        let mesh = cuboid(DVec3::new(1.0, 2.0, 3.0)).unwrap();

        save_obj(&path, &mesh).unwrap();
        let loaded = load_obj(&path).unwrap();

        assert_eq!(loaded.vertex_count(), mesh.vertex_count());
        assert_eq!(loaded.triangle_count(), mesh.triangle_count());
        for i in 0..mesh.triangle_count() {
            let original = mesh.triangle(i).map(|v| mesh.vertex(v));
            let reloaded = loaded.triangle(i).map(|v| loaded.vertex(v));
            assert_eq!(original, reloaded);
        }
        assert_relative_eq!(loaded.volume(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_keeps_f32_precision() {
        let mesh = sphere(1.0, 12).unwrap();
        let mut out = Vec::new();
        write_obj(&mut out, &mesh).unwrap();
        let loaded = read_obj(&mut Cursor::new(out)).unwrap();
        assert_eq!(loaded.triangle_count(), mesh.triangle_count());
        for i in 0..mesh.triangle_count() {
            for (a, b) in mesh.triangle(i).iter().zip(loaded.triangle(i)) {
                assert!(mesh.vertex(*a).abs_diff_eq(loaded.vertex(b), 1e-6));
            }
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_obj(dir.path().join("missing.obj"));
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
