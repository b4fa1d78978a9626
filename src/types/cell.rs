//! Cell types

/// The type of a reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum ReferenceCellType {
    /// A point
    Point = 0,
    /// A line interval
    Interval = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
    /// A tetrahedron (whose faces are all triangles)
    Tetrahedron = 4,
    /// A hexahedron (whose faces are all quadrilaterals)
    Hexahedron = 5,
    /// A triangular prism, called a wedge by VTK
    Prism = 6,
}

impl ReferenceCellType {
    /// Create a reference cell type from a u8
    pub fn from(i: u8) -> Option<ReferenceCellType> {
        match i {
            0 => Some(ReferenceCellType::Point),
            1 => Some(ReferenceCellType::Interval),
            2 => Some(ReferenceCellType::Triangle),
            3 => Some(ReferenceCellType::Quadrilateral),
            4 => Some(ReferenceCellType::Tetrahedron),
            5 => Some(ReferenceCellType::Hexahedron),
            6 => Some(ReferenceCellType::Prism),
            _ => None,
        }
    }

    /// The number of per-axis degrees a tensor-product element on this cell takes
    ///
    /// Simplices take a single degree. A prism takes one degree for its
    /// triangular cross-section and one for the extrusion.
    pub fn axis_count(&self) -> usize {
        match self {
            ReferenceCellType::Point => 0,
            ReferenceCellType::Interval => 1,
            ReferenceCellType::Triangle => 1,
            ReferenceCellType::Quadrilateral => 2,
            ReferenceCellType::Tetrahedron => 1,
            ReferenceCellType::Hexahedron => 3,
            ReferenceCellType::Prism => 2,
        }
    }
}

impl std::fmt::Display for ReferenceCellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReferenceCellType::Point => "point",
            ReferenceCellType::Interval => "interval",
            ReferenceCellType::Triangle => "triangle",
            ReferenceCellType::Quadrilateral => "quadrilateral",
            ReferenceCellType::Tetrahedron => "tetrahedron",
            ReferenceCellType::Hexahedron => "hexahedron",
            ReferenceCellType::Prism => "prism",
        };
        write!(f, "{name}")
    }
}
