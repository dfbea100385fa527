// Copyright (C) 2020-2026 Andy Kurnia.

// Row-major index translation. A down-lane strider is the transposed view
// of the board; no mirrored copy of the cells exists anywhere.

#[derive(Clone, Copy)]
pub struct Strider {
    base: usize,
    step: usize,
    len: usize,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> usize {
        self.base + idx * self.step
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: usize,
    pub cols: usize,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: usize) -> Strider {
        Strider {
            base: row * self.cols,
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: usize) -> Strider {
        Strider {
            base: col,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: usize) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    // number of lanes in the given orientation
    #[inline(always)]
    pub fn lanes(&self, down: bool) -> usize {
        if down {
            self.cols
        } else {
            self.rows
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}
