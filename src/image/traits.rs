//! Row-oriented access to pixel grids.
//!
//! Coordinates are always `(row, col)`; row 0 is the top of the image.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, row: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, row: 0 }
    }

    #[inline]
    fn pixel(&self, row: usize, col: usize) -> Self::Pixel {
        self.row(row)[col]
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, row: usize) -> &mut [Self::Pixel];

    #[inline]
    fn put_pixel(&mut self, row: usize, col: usize, px: Self::Pixel) {
        self.row_mut(row)[col] = px;
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    row: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.image.height() {
            return None;
        }
        let row = self.row;
        self.row += 1;
        Some(self.image.row(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.row);
        (left, Some(left))
    }
}

impl<'a, I: ImageView> ExactSizeIterator for Rows<'a, I> {}
