//! # grid_bfs
//!
//! Deterministic shortest paths on a small fixed-size grid. Runs
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! over the 4-connected neighbourhood, reconstructs the route from a
//! per-query came-from map and tracks the currently highlighted path so a
//! host can clear stale highlighting before applying the next result.
//! Rendering is entirely the host's concern: the engine consumes
//! `(row, col)` targets and produces ordered [Cell] sequences.
mod bfs;
mod cell;
mod error;

pub use crate::cell::Cell;
pub use crate::error::PathError;

use crate::bfs::bfs;
use core::fmt;
use log::{debug, info};
use std::mem;

/// Outcome of one full clear, search, apply cycle, see
/// [select_target](GridPathfinder::select_target). `cleared` is present even
/// when the search fails so stale highlighting never survives a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathUpdate {
    /// Cells of the previously applied path, to unhighlight.
    pub cleared: Vec<Cell>,
    /// The freshly applied path to highlight, or why there is none.
    pub found: Result<Vec<Cell>, PathError>,
}

/// [GridPathfinder] owns the grid bounds, the fixed start cell all paths
/// originate from, and the last applied path. [find_path](Self::find_path)
/// is a pure query; only [apply_path](Self::apply_path),
/// [clear_path](Self::clear_path) and [select_target](Self::select_target)
/// touch the stored path, so the exclusive borrow they take serializes the
/// clear-before-set cycle.
#[derive(Clone, Debug)]
pub struct GridPathfinder {
    rows: i32,
    cols: i32,
    start: Cell,
    current_path: Vec<Cell>,
}

impl GridPathfinder {
    /// Creates an engine for a `rows` x `cols` grid with all paths starting
    /// at `start`. How the host maps its widgets to coordinates is its own
    /// concern; the reference host numbers 36 children row-major. Fails with
    /// [PathError::OutOfBounds] if the grid is empty or `start` lies outside
    /// it.
    pub fn new(rows: i32, cols: i32, start: Cell) -> Result<GridPathfinder, PathError> {
        let engine = GridPathfinder {
            rows,
            cols,
            start,
            current_path: Vec::new(),
        };
        if rows <= 0 || cols <= 0 || !engine.in_bounds(start) {
            return Err(PathError::OutOfBounds(start));
        }
        Ok(engine)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The cell every path originates from. Never part of a returned path.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The last applied path; empty once cleared, until the next apply.
    pub fn current_path(&self) -> &[Cell] {
        &self.current_path
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    fn neighbours(&self, cell: &Cell) -> Vec<Cell> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.in_bounds(*p))
            .collect::<Vec<Cell>>()
    }

    /// Computes the shortest path from the start cell to `target`: the
    /// ordered cells to step through, target inclusive, start exclusive.
    /// Querying the start cell itself yields an empty path. Pure with
    /// respect to engine state; the stored path is left untouched.
    pub fn find_path(&self, target: Cell) -> Result<Vec<Cell>, PathError> {
        if !self.in_bounds(target) {
            return Err(PathError::OutOfBounds(target));
        }
        debug!("Searching for a path {} -> {}", self.start, target);
        let result = bfs(
            &self.start,
            |node| self.neighbours(node),
            |node| *node == target,
        );
        match result {
            Some(mut path) => {
                // The walk begins at the start cell; only the steps after it
                // are reported.
                path.remove(0);
                Ok(path)
            }
            None => {
                info!("{} is not reachable from {}", target, self.start);
                Err(PathError::NoPath(target))
            }
        }
    }

    /// Stores `path` as the current one and returns the cells to highlight.
    /// Callers clear the previous path first;
    /// [select_target](Self::select_target) encodes the full cycle.
    pub fn apply_path(&mut self, path: Vec<Cell>) -> &[Cell] {
        self.current_path = path;
        &self.current_path
    }

    /// Takes the current path out of the engine and returns its cells so the
    /// host can unhighlight them. A no-op yielding an empty vec when no path
    /// is stored.
    pub fn clear_path(&mut self) -> Vec<Cell> {
        mem::take(&mut self.current_path)
    }

    /// One full click cycle: clear the previous path, search for `target`,
    /// apply the result. The previous path is cleared even when the search
    /// fails, so the host can always unhighlight
    /// [cleared](PathUpdate::cleared) before looking at
    /// [found](PathUpdate::found).
    pub fn select_target(&mut self, target: Cell) -> PathUpdate {
        let cleared = self.clear_path();
        let found = self.find_path(target);
        if let Ok(path) = &found {
            self.apply_path(path.clone());
        }
        PathUpdate { cleared, found }
    }
}

impl fmt::Display for GridPathfinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if cell == self.start {
                    write!(f, "S")?;
                } else if self.current_path.contains(&cell) {
                    write!(f, "*")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
