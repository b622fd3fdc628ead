//! Candidate lattice math.
//!
//! Torches go on a regular grid of columns spaced `spacing` blocks apart.
//! Each tick the player's position is snapped to the nearest grid index
//! and a square of candidate columns is generated around it, skipping the
//! column the player stands in so placement never blocks their own build.

/// Snap a coordinate to the nearest grid index for the given spacing.
///
/// Ties round away from zero: a player standing exactly halfway between
/// two columns (x = 3.0 with spacing 6) snaps to the column farther from
/// the origin. Either neighbor would do; what matters is that the choice
/// is stable across ticks.
pub fn snap_index(coord: f64, spacing: i32) -> i32 {
    (coord / spacing as f64).round() as i32
}

/// Candidate `(x, z)` columns around the snapped player index.
///
/// Covers offsets `[-half_width, half_width]` in both axes, excluding
/// `(0, 0)`, so the result always holds `(2n+1)^2 - 1` columns.
pub fn lattice(px: f64, pz: f64, spacing: i32, half_width: i32) -> Vec<(i32, i32)> {
    let xi = snap_index(px, spacing);
    let zj = snap_index(pz, spacing);

    let mut cells = Vec::new();
    for i in -half_width..=half_width {
        for j in -half_width..=half_width {
            if i == 0 && j == 0 {
                continue;
            }
            cells.push(((xi + i) * spacing, (zj + j) * spacing));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        assert_eq!(snap_index(0.0, 6), 0);
        assert_eq!(snap_index(2.9, 6), 0);
        assert_eq!(snap_index(3.1, 6), 1);
        assert_eq!(snap_index(-3.1, 6), -1);
        assert_eq!(snap_index(11.0, 6), 2);
    }

    #[test]
    fn snap_breaks_ties_away_from_zero() {
        assert_eq!(snap_index(3.0, 6), 1);
        assert_eq!(snap_index(-3.0, 6), -1);
        assert_eq!(snap_index(9.0, 6), 2);
    }

    #[test]
    fn lattice_size_and_center_exclusion() {
        for half_width in 0..=4 {
            for spacing in [1, 6, 9] {
                let cells = lattice(0.0, 0.0, spacing, half_width);
                let side = 2 * half_width + 1;
                assert_eq!(cells.len(), (side * side - 1) as usize);
                assert!(!cells.contains(&(0, 0)));
            }
        }
    }

    #[test]
    fn lattice_cells_are_grid_multiples() {
        let cells = lattice(13.2, -7.9, 6, 2);
        for (x, z) in cells {
            assert_eq!(x % 6, 0);
            assert_eq!(z % 6, 0);
        }
    }

    #[test]
    fn lattice_excludes_player_column_off_origin() {
        // player at (13.2, -7.9) snaps to index (2, -1) => column (12, -6)
        let cells = lattice(13.2, -7.9, 6, 2);
        assert!(!cells.contains(&(12, -6)));
        assert!(cells.contains(&(18, -6)));
        assert!(cells.contains(&(12, 0)));
    }

    #[test]
    fn zero_half_width_yields_no_candidates() {
        assert!(lattice(100.0, 100.0, 6, 0).is_empty());
    }
}
