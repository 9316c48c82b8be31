//! # Mesh Data Structure
//!
//! Indexed triangle mesh: a vertex buffer and a triangle buffer of vertex
//! ids, plus the transform, measurement and buffer-conversion operations.

use glam::{DAffine3, DVec3};

use crate::error::{MeshError, MeshResult};
use crate::transform::{apply_point, translation};

/// A triangle mesh with vertices and indices.
///
/// Vertex ids are positions in the vertex buffer and stay stable for the
/// mesh's lifetime; transforms move vertices but never touch topology.
/// Triangles are wound counter-clockwise as seen from outside, which the
/// signed-volume integral relies on.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2).unwrap();
/// assert!(mesh.validate());
/// assert!(mesh.add_triangle(0, 1, 3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Creates a mesh from a vertex list and a triangle list.
    ///
    /// Every triangle id must be below the vertex count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_kernel::{Mesh, MeshError};
    /// use glam::DVec3;
    ///
    /// let err = Mesh::from_buffers(vec![DVec3::ZERO], vec![[0, 1, 2]]).unwrap_err();
    /// assert!(matches!(err, MeshError::IndexOutOfRange { index: 1, .. }));
    /// ```
    pub fn from_buffers(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        let mesh = Self {
            vertices,
            triangles,
        };
        mesh.check_indices()?;
        Ok(mesh)
    }

    /// Creates a mesh from `n×3` vertex rows and `m×3` triangle rows.
    pub fn from_rows(vertex_rows: &[[f64; 3]], triangle_rows: &[[u32; 3]]) -> MeshResult<Self> {
        let vertices = vertex_rows.iter().map(|row| DVec3::from_array(*row)).collect();
        Self::from_buffers(vertices, triangle_rows.to_vec())
    }

    /// Creates a mesh from flat row-major buffers (`[x, y, z, x, y, z, ...]`
    /// and `[i0, i1, i2, ...]`).
    ///
    /// Both lengths must be multiples of 3.
    pub fn from_flat(positions: &[f64], indices: &[u32]) -> MeshResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::malformed(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::malformed(format!(
                "index buffer length {} is not a multiple of 3",
                indices.len()
            )));
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| DVec3::new(c[0], c[1], c[2]))
            .collect();
        let triangles = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::from_buffers(vertices, triangles)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    ///
    /// Every id must name a vertex already in the mesh; the triangle is not
    /// added otherwise.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        if let Some(index) = [v0, v1, v2].into_iter().find(|&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                triangle: self.triangles.len(),
                index,
                vertex_count,
            });
        }
        self.triangles.push([v0, v1, v2]);
        Ok(())
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    fn corners(&self, tri: &[u32; 3]) -> [DVec3; 3] {
        [
            self.vertices[tri[0] as usize],
            self.vertices[tri[1] as usize],
            self.vertices[tri[2] as usize],
        ]
    }

    // =========================================================================
    // TRANSFORM
    // =========================================================================

    /// Maps every vertex through `transform` in place.
    pub fn transform(&mut self, transform: &DAffine3) {
        for v in &mut self.vertices {
            *v = apply_point(transform, *v);
        }
    }

    /// Returns the vertices mapped through `transform`, leaving the mesh
    /// unchanged. The triangle buffer applies to the result as-is.
    pub fn transformed_vertices(&self, transform: &DAffine3) -> Vec<DVec3> {
        self.vertices
            .iter()
            .map(|v| apply_point(transform, *v))
            .collect()
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Flips every triangle's winding by swapping its last two ids.
    ///
    /// Normals point the other way afterwards and `volume()` changes sign.
    pub fn reverse_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    // =========================================================================
    // MEASUREMENT
    // =========================================================================

    /// Enclosed volume from the signed tetrahedra each triangle forms with
    /// the origin.
    ///
    /// Only meaningful for a closed, consistently wound mesh; an open mesh
    /// returns a number with no geometric meaning. Outward winding gives a
    /// positive volume.
    pub fn volume(&self) -> f64 {
        let sum: f64 = self
            .triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = self.corners(tri);
                (DVec3::ZERO - v2).dot((v1 - v2).cross(v0 - v2))
            })
            .sum();
        sum / 6.0
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = self.corners(tri);
                (v1 - v0).cross(v2 - v0).length()
            })
            .sum::<f64>()
            / 2.0
    }

    /// Area-weighted centroid of the surface.
    ///
    /// Each triangle's barycenter is weighted by twice its area, so dense
    /// sampling in one region does not pull the center towards it. A mesh
    /// with no area falls back to the plain vertex average (the origin when
    /// there are no vertices).
    pub fn geometric_center(&self) -> DVec3 {
        let mut weighted = DVec3::ZERO;
        let mut total_weight = 0.0;

        for tri in &self.triangles {
            let [v0, v1, v2] = self.corners(tri);
            let double_area = (v1 - v0).cross(v2 - v0).length();
            weighted += (v0 + v1 + v2) / 3.0 * double_area;
            total_weight += double_area;
        }

        if total_weight > 0.0 {
            return weighted / total_weight;
        }
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Moves the mesh so its geometric center sits at the origin.
    pub fn recenter_to_origin(&mut self) {
        let center = self.geometric_center();
        self.transform(&translation(-center));
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    // =========================================================================
    // COMBINATION
    // =========================================================================

    /// Appends another mesh's buffers, offsetting its triangle ids by this
    /// mesh's vertex count. No vertices are welded.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex id
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.check_indices().is_ok()
            && self
                .triangles
                .iter()
                .all(|tri| tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2])
    }

    fn check_indices(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Returns the vertices as `n×3` rows.
    pub fn vertex_rows(&self) -> Vec<[f64; 3]> {
        self.vertices.iter().map(|v| v.to_array()).collect()
    }

    /// Returns the triangles as `m×3` rows.
    pub fn triangle_rows(&self) -> Vec<[u32; 3]> {
        self.triangles.clone()
    }

    /// Returns flattened `[x, y, z, x, y, z, ...]` vertex coordinates.
    pub fn vertices_flat(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Returns flattened `[i0, i1, i2, i0, i1, i2, ...]` triangle indices.
    pub fn indices_flat(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit right tetrahedron with outward winding.
    fn tetrahedron() -> Mesh {
        Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_buffers_rejects_out_of_range_ids() {
        let result = Mesh::from_buffers(vec![DVec3::ZERO, DVec3::X], vec![[0, 1, 2]]);
        match result {
            Err(MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            }) => {
                assert_eq!(triangle, 0);
                assert_eq!(index, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_and_back() {
        let rows = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mesh = Mesh::from_rows(&rows, &[[0, 1, 2]]).unwrap();
        assert_eq!(mesh.vertex_rows(), rows.to_vec());
        assert_eq!(mesh.triangle_rows(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_from_flat_rejects_partial_rows() {
        let result = Mesh::from_flat(&[0.0, 0.0, 0.0, 1.0], &[]);
        assert!(matches!(result, Err(MeshError::MalformedBuffer { .. })));

        let result = Mesh::from_flat(&[0.0; 9], &[0, 1]);
        assert!(matches!(result, Err(MeshError::MalformedBuffer { .. })));
    }

    #[test]
    fn test_flat_export_matches_flat_import() {
        let mesh = tetrahedron();
        let copy = Mesh::from_flat(&mesh.vertices_flat(), &mesh.indices_flat()).unwrap();
        assert_eq!(copy, mesh);
        assert_eq!(mesh.vertices_f32().len(), 12);
    }

    #[test]
    fn test_volume_of_tetrahedron() {
        assert_relative_eq!(tetrahedron().volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_volume_is_translation_invariant() {
        let mut mesh = tetrahedron();
        mesh.translate(DVec3::new(10.0, -3.0, 7.0));
        assert_relative_eq!(mesh.volume(), 1.0 / 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_reverse_winding_negates_volume() {
        let mut mesh = tetrahedron();
        mesh.reverse_winding();
        assert_relative_eq!(mesh.volume(), -1.0 / 6.0, epsilon = 1e-12);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_surface_area_of_tetrahedron() {
        let expected = 1.5 + 3.0_f64.sqrt() / 2.0;
        assert_relative_eq!(tetrahedron().surface_area(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_center_is_area_weighted() {
        // One large and one tiny triangle: the vertex average sits between
        // them, the area-weighted center sits near the large one
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(3.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 3.0, 0.0));
        mesh.add_vertex(DVec3::new(10.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(10.03, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(10.0, 0.03, 0.0));
        mesh.add_triangle(0, 1, 2).unwrap();
        mesh.add_triangle(3, 4, 5).unwrap();

        let center = mesh.geometric_center();
        let big = 4.5;
        let small = 0.00045;
        let expected_x = (1.0 * big + (30.03 / 3.0) * small) / (big + small);
        assert_relative_eq!(center.x, expected_x, epsilon = 1e-9);
        assert!(center.x < 1.01);

        // Same shape at micrometer scale, where the summed area is ~1e-11
        mesh.transform(&crate::transform::uniform_scaling(1e-6));
        let center = mesh.geometric_center();
        assert_relative_eq!(center.x, expected_x * 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn test_geometric_center_without_area_falls_back() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(4.0, 0.0, 0.0));
        assert_eq!(mesh.geometric_center(), DVec3::new(3.0, 0.0, 0.0));
        assert_eq!(Mesh::new().geometric_center(), DVec3::ZERO);
    }

    #[test]
    fn test_recenter_to_origin() {
        let mut mesh = tetrahedron();
        mesh.translate(DVec3::new(5.0, 5.0, 5.0));
        mesh.recenter_to_origin();
        assert!(mesh.geometric_center().abs_diff_eq(DVec3::ZERO, 1e-12));
    }

    #[test]
    fn test_transformed_vertices_leaves_mesh_untouched() {
        let mesh = tetrahedron();
        let moved = mesh.transformed_vertices(&translation(DVec3::X));
        assert_eq!(moved[0], DVec3::X);
        assert_eq!(mesh.vertex(0), DVec3::ZERO);
        assert_eq!(moved.len(), mesh.vertex_count());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_repeated_id() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_triangle(0, 1, 1).unwrap();
        assert!(!mesh.validate());
    }

    #[test]
    fn test_add_triangle_rejects_unknown_vertex() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        let result = mesh.add_triangle(0, 1, 2);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                triangle: 0,
                index: 1,
                vertex_count: 1,
            })
        ));
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate());
        assert_eq!(mesh.volume(), 0.0);
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = tetrahedron();
        let mesh2 = tetrahedron();

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 8);
        assert_eq!(mesh1.triangle_count(), 8);
        assert_eq!(mesh1.triangle(4), [4, 6, 5]); // Offset by 4
    }
}
