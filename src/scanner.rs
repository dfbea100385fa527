// Copyright (C) 2020-2026 Andy Kurnia.

use super::grid;

// A candidate straight-line span of cells where a word could be placed this
// turn, with the pattern snapshot taken at scan time (0 = empty cell).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Slot {
    pub down: bool,
    pub lane: usize,
    pub start: usize,
    pub pattern: Box<[u8]>,
}

impl Slot {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

// Enumerates candidate slots on both orientations: across lanes first, then
// down lanes via the transposed striders. Recomputed per call since the grid
// mutates between turns.
pub fn scan(grid: &grid::Grid, rack_size: usize) -> Vec<Slot> {
    let first = grid.is_first_move();
    let mut slots = Vec::new();
    for down in [false, true] {
        let dim = grid.dim();
        let num_lanes = dim.lanes(down);
        let lane_len = dim.lane(down, 0).len();
        for lane in 0..num_lanes {
            for start in 0..lane_len - 1 {
                for len in 2..=lane_len - start {
                    if let Some(pattern) =
                        check_span(grid, first, down, lane, start, len, rack_size)
                    {
                        slots.push(Slot {
                            down,
                            lane,
                            start,
                            pattern,
                        });
                    }
                }
            }
        }
    }
    slots
}

fn check_span(
    grid: &grid::Grid,
    first: bool,
    down: bool,
    lane: usize,
    start: usize,
    len: usize,
    rack_size: usize,
) -> Option<Box<[u8]>> {
    let (star_lane, star_idx) = if down {
        (grid.star_col(), grid.star_row())
    } else {
        (grid.star_row(), grid.star_col())
    };
    if first && !(lane == star_lane && start <= star_idx && star_idx < start + len) {
        // the first word must cover the center cell
        return None;
    }

    let pattern = grid.pattern(down, lane, start, len);
    let used = pattern.iter().filter(|&&tile| tile != 0).count();
    if len - used > rack_size || used == len {
        return None;
    }

    if first {
        return Some(pattern);
    }

    // reject spans that would silently lengthen an existing word
    let strider = grid.dim().lane(down, lane);
    if start > 0 && grid.tile_at_index(strider.at(start - 1)) != 0 {
        return None;
    }
    if start + len < strider.len() && grid.tile_at_index(strider.at(start + len)) != 0 {
        return None;
    }

    if used > 0 {
        return Some(pattern);
    }

    // a fully empty span must connect through an adjacent lane
    for adjacent in [lane.wrapping_sub(1), lane + 1] {
        if adjacent < grid.dim().lanes(down) {
            let adjacent_strider = grid.dim().lane(down, adjacent);
            if (start..start + len).any(|i| grid.tile_at_index(adjacent_strider.at(i)) != 0) {
                return Some(pattern);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_board() -> grid::Grid {
        grid::Grid::parse(&vec![" ".repeat(15); 15].join("\n")).unwrap()
    }

    #[test]
    fn first_move_slots_cover_the_center() {
        let grid = blank_board();
        let slots = scan(&grid, 7);
        assert!(!slots.is_empty());
        for slot in &slots {
            assert_eq!(slot.lane, 7);
            assert!(slot.start <= 7 && 7 < slot.start + slot.len());
            assert!(slot.len() >= 2 && slot.len() <= 7);
            assert!(slot.pattern.iter().all(|&tile| tile == 0));
        }
        // both orientations are present
        assert!(slots.iter().any(|slot| slot.down));
        assert!(slots.iter().any(|slot| !slot.down));
    }

    #[test]
    fn scan_is_idempotent() {
        let mut rows = vec![" ".repeat(15); 15];
        rows[7].replace_range(6..9, "CAT");
        let grid = grid::Grid::parse(&rows.join("\n")).unwrap();
        let a = scan(&grid, 7);
        let b = scan(&grid, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_extending_spans_and_accepts_adjacent_ones() {
        let mut rows = vec![" ".repeat(15); 15];
        rows[7].replace_range(6..9, "CAT");
        let grid = grid::Grid::parse(&rows.join("\n")).unwrap();
        let slots = scan(&grid, 7);
        for slot in &slots {
            if !slot.down && slot.lane == 7 {
                // across slots in the word's own row must absorb it entirely,
                // never stop right before or after it
                assert!(slot.start + slot.len() <= 6 || slot.start + slot.len() >= 9);
                assert!(slot.start <= 6 || slot.start >= 9);
            }
            if slot.pattern.iter().all(|&tile| tile == 0) {
                // disconnected spans are only acceptable next to the word
                assert!(
                    (!slot.down && (slot.lane == 6 || slot.lane == 8))
                        || (slot.down && (slot.lane == 5 || slot.lane == 9))
                );
            }
        }
        // a down slot through the A can be played with one tile
        assert!(slots
            .iter()
            .any(|slot| slot.down && slot.lane == 7 && slot.len() - 1
                == slot.pattern.iter().filter(|&&tile| tile == 0).count()));
    }

    #[test]
    fn small_rack_limits_empty_cells() {
        let grid = blank_board();
        for slot in scan(&grid, 2) {
            assert!(slot.len() <= 2);
        }
    }
}
