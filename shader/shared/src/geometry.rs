//! Host-side vertex data for the two grid draws.
//!
//! Everything here is in grid coordinates; the vertex stage maps them to
//! clip space. Buffers are plain `Vec2`/`f32` runs so the host can
//! `bytemuck::cast_slice` them straight into vertex buffers.

use crate::push_constants::Size;
use crate::Cell;
use glam::*;

/// Two triangles per cell.
pub const VERTICES_PER_CELL: usize = 6;

/// Inset between a cell's quad and its grid lines, in cell units.
pub const CELL_MARGIN: f32 = 0.05;

/// Line-list endpoints for the gridlines draw: one vertical line per column
/// boundary and one horizontal line per row boundary, spanning the grid.
pub fn grid_line_vertices(size: Size) -> Vec<Vec2> {
    let (w, h) = (size.width as f32, size.height as f32);
    let mut lines = Vec::with_capacity((size.width as usize + size.height as usize + 2) * 2);

    for x in 0..=size.width {
        lines.push(vec2(x as f32, 0.0));
        lines.push(vec2(x as f32, h));
    }
    for y in 0..=size.height {
        lines.push(vec2(0.0, y as f32));
        lines.push(vec2(w, y as f32));
    }

    lines
}

fn cell_rect(x: f32, y: f32) -> [Vec2; VERTICES_PER_CELL] {
    let near = CELL_MARGIN;
    let far = 1.0 - CELL_MARGIN;
    [
        vec2(x + near, y + near),
        vec2(x + near, y + far),
        vec2(x + far, y + near),
        vec2(x + near, y + far),
        vec2(x + far, y + near),
        vec2(x + far, y + far),
    ]
}

/// Triangle-list vertices for the cell-occupancy draw, one inset quad per
/// cell in row-major order. Matches [`liveness_attributes`] vertex for
/// vertex.
pub fn cell_vertices(size: Size) -> Vec<Vec2> {
    let mut vertices = Vec::with_capacity(size.cell_count() * VERTICES_PER_CELL);
    for y in 0..size.height {
        for x in 0..size.width {
            vertices.extend(cell_rect(x as f32, y as f32));
        }
    }
    vertices
}

/// Expands per-cell occupancy into the per-vertex `alive` attribute run,
/// one scalar per vertex of [`cell_vertices`].
pub fn liveness_attributes(cells: &[Cell]) -> Vec<f32> {
    cells
        .iter()
        .flat_map(|cell| [cell.liveness(); VERTICES_PER_CELL])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_span_the_grid() {
        let size = Size::new(4, 3);
        let lines = grid_line_vertices(size);
        // (w + 1) verticals + (h + 1) horizontals, two endpoints each.
        assert_eq!(lines.len(), (5 + 4) * 2);
        assert!(lines.iter().all(|v| v.x >= 0.0 && v.x <= 4.0));
        assert!(lines.iter().all(|v| v.y >= 0.0 && v.y <= 3.0));
        // First vertical line runs down the left edge.
        assert_eq!(lines[0], vec2(0.0, 0.0));
        assert_eq!(lines[1], vec2(0.0, 3.0));
    }

    #[test]
    fn cell_quads_stay_inside_their_cell() {
        let size = Size::new(3, 2);
        let vertices = cell_vertices(size);
        assert_eq!(vertices.len(), size.cell_count() * VERTICES_PER_CELL);

        // Second cell of the first row.
        let quad = &vertices[VERTICES_PER_CELL..2 * VERTICES_PER_CELL];
        for v in quad {
            assert!(v.x > 1.0 && v.x < 2.0, "{v}");
            assert!(v.y > 0.0 && v.y < 1.0, "{v}");
        }
        assert_eq!(quad[0], vec2(1.0 + CELL_MARGIN, CELL_MARGIN));
        assert_eq!(quad[5], vec2(2.0 - CELL_MARGIN, 1.0 - CELL_MARGIN));
    }

    #[test]
    fn liveness_repeats_once_per_vertex() {
        let cells = [Cell::Dead, Cell::Alive, Cell::Dead];
        let attributes = liveness_attributes(&cells);
        assert_eq!(attributes.len(), cells.len() * VERTICES_PER_CELL);
        assert!(attributes[..VERTICES_PER_CELL].iter().all(|&a| a == 0.0));
        assert!(attributes[VERTICES_PER_CELL..2 * VERTICES_PER_CELL]
            .iter()
            .all(|&a| a == 1.0));
        assert!(attributes[2 * VERTICES_PER_CELL..].iter().all(|&a| a == 0.0));
    }
}
