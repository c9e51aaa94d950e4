/// This trait defines how we will get seams out of a picture.  It's
/// a primitive interface, just enough to leave room for other energy
/// functions alongside the gradient one.
pub trait SeamFinder {
    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&mut self) -> Vec<u32>;

    /// Request a left-to-right seam: one row index per column.  The
    /// finder may rearrange its picture while it works, but must put
    /// it back before returning.
    fn find_horizontal_seam(&mut self) -> Vec<u32>;
}
