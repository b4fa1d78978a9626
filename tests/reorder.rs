use approx::assert_relative_eq;
use ndreorder::element::lagrange::{LagrangeElement, LagrangeElementFamily};
use ndreorder::permutation::{apply_permutation, inverse_permutation, MatchOptions};
use ndreorder::reorder::vtk_lagrange_triangle_reorder_with_options;
use ndreorder::traits::{ElementFamily, NodalElement};
use ndreorder::vtk::nodes;
use ndreorder::vtk::{
    VtkLagrangeHexahedron, VtkLagrangeQuadrilateral, VtkLagrangeTetra, VtkLagrangeTriangle,
    VtkLagrangeWedge,
};
use ndreorder::{
    vtk_lagrange_hexahedron_reorder, vtk_lagrange_interval_reorder,
    vtk_lagrange_quadrilateral_reorder, vtk_lagrange_tetrahedron_reorder,
    vtk_lagrange_triangle_reorder, vtk_lagrange_wedge_reorder, Degree, NodeList, Permutation,
    ReferenceCellType, ReorderError,
};

fn check_perm(vtk: &NodeList<f64>, element: &impl NodalElement<T = f64>, perm: &Permutation) {
    let element_nodes = element.node_coordinates();
    assert_eq!(vtk.len(), element_nodes.len());
    assert_eq!(perm.len(), vtk.len());
    for (v, p) in vtk.iter().zip(perm) {
        assert_eq!(v.len(), element_nodes[*p].len());
        for (a, b) in v.iter().zip(&element_nodes[*p]) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }
}

fn element(cell: ReferenceCellType, degree: usize) -> LagrangeElement<f64> {
    LagrangeElementFamily::<f64>::new(Degree::Uniform(degree))
        .element(cell)
        .unwrap()
}

#[test]
fn test_interval() {
    for degree in 1..6 {
        let e = element(ReferenceCellType::Interval, degree);
        let perm = vtk_lagrange_interval_reorder(&e).unwrap();
        let vtk = nodes::interval_nodes::<f64>(degree).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_triangle() {
    for degree in 1..6 {
        let e = element(ReferenceCellType::Triangle, degree);
        let perm = vtk_lagrange_triangle_reorder(&e).unwrap();
        let vtk = nodes::triangle_nodes::<f64>(&VtkLagrangeTriangle, degree).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_quadrilateral() {
    for degree in 1..6 {
        let e = element(ReferenceCellType::Quadrilateral, degree);
        let perm = vtk_lagrange_quadrilateral_reorder(&e).unwrap();
        let vtk =
            nodes::quadrilateral_nodes::<f64>(&VtkLagrangeQuadrilateral, [degree, degree]).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_tetrahedron() {
    for degree in 1..6 {
        let e = element(ReferenceCellType::Tetrahedron, degree);
        let perm = vtk_lagrange_tetrahedron_reorder(&e).unwrap();
        let vtk = nodes::tetrahedron_nodes::<f64>(&VtkLagrangeTetra, degree).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_wedge() {
    for degree in 1..6 {
        let e = element(ReferenceCellType::Prism, degree);
        let perm = vtk_lagrange_wedge_reorder(&e).unwrap();
        let vtk = nodes::wedge_nodes::<f64>(&VtkLagrangeWedge, [degree, degree]).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_hexahedron() {
    for degree in 1..5 {
        let e = element(ReferenceCellType::Hexahedron, degree);
        let perm = vtk_lagrange_hexahedron_reorder(&e).unwrap();
        let vtk = nodes::hexahedron_nodes::<f64>(&VtkLagrangeHexahedron, [degree; 3]).unwrap();
        check_perm(&vtk, &e, &perm);
    }
}

#[test]
fn test_hexahedron_non_uniform() {
    let e = LagrangeElement::<f64>::new(
        ReferenceCellType::Hexahedron,
        Degree::PerAxis(vec![2, 2, 3]),
    )
    .unwrap();
    assert_eq!(
        vtk_lagrange_hexahedron_reorder(&e),
        Err(ReorderError::NonUniformDegree(vec![2, 2, 3]))
    );
}

#[test]
fn test_vtk_vertices_first() {
    // VTK numbers the vertices first, and so does the element
    let e = element(ReferenceCellType::Tetrahedron, 3);
    let perm = vtk_lagrange_tetrahedron_reorder(&e).unwrap();
    assert_eq!(perm[..4], [0, 1, 2, 3]);

    let e = element(ReferenceCellType::Quadrilateral, 3);
    let perm = vtk_lagrange_quadrilateral_reorder(&e).unwrap();
    // VTK quadrilaterals are numbered anticlockwise
    assert_eq!(perm[..4], [0, 1, 3, 2]);
}

#[test]
fn test_reorder_field() {
    // A vector-valued field evaluated at the nodes of the element, converted to VTK order
    let e = element(ReferenceCellType::Triangle, 4);
    let element_nodes = e.node_coordinates();
    let field = element_nodes
        .iter()
        .flat_map(|p| [p[0] + 2.0 * p[1], p[0] * p[1]])
        .collect::<Vec<_>>();

    let perm = vtk_lagrange_triangle_reorder(&e).unwrap();
    let vtk_field = apply_permutation(&field, &perm, 2).unwrap();
    let vtk = nodes::triangle_nodes::<f64>(&VtkLagrangeTriangle, 4).unwrap();
    for (p, value) in vtk.iter().zip(vtk_field.chunks(2)) {
        assert_relative_eq!(value[0], p[0] + 2.0 * p[1], epsilon = 1e-10);
        assert_relative_eq!(value[1], p[0] * p[1], epsilon = 1e-10);
    }

    // And back again
    let inverse = inverse_permutation(&perm).unwrap();
    let round_trip = apply_permutation(&vtk_field, &inverse, 2).unwrap();
    for (a, b) in round_trip.iter().zip(&field) {
        assert_relative_eq!(*a, *b);
    }
}

#[test]
fn test_f32() {
    // Coordinates that should be zero may carry single precision rounding errors
    let mut options = MatchOptions::default();
    options.set_absolute_tolerance(1e-6);

    let e = LagrangeElement::<f32>::new(ReferenceCellType::Triangle, Degree::Uniform(3)).unwrap();
    let perm = vtk_lagrange_triangle_reorder_with_options(&e, &options).unwrap();
    let e64 = element(ReferenceCellType::Triangle, 3);
    assert_eq!(perm, vtk_lagrange_triangle_reorder(&e64).unwrap());
}
