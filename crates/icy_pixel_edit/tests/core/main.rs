//! Grid model tests: cells, grid storage, geometry, paint operations,
//! flood fill and selection buffers


mod brushes_tests;
mod grid_tests;
mod selection_tests;
