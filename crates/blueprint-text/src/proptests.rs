//! Property-based tests for cleaning and segmentation.
