/// Iterates over the physical buffer offsets of a strided view, in logical
/// row-major order.
///
/// Used to read non-contiguous views (e.g. the result of `permute`) and to
/// lay them out again in `contiguous()`.
#[derive(Debug)]
pub struct StridedOffsetIter<'a> {
    shape: &'a [usize],
    strides: &'a [usize],
    base_offset: usize,
    coords: Vec<usize>,
    current_index: usize,
    total_elements: usize,
}

impl<'a> StridedOffsetIter<'a> {
    pub fn new(shape: &'a [usize], strides: &'a [usize], base_offset: usize) -> Self {
        Self {
            shape,
            strides,
            base_offset,
            coords: vec![0; shape.len()],
            current_index: 0,
            total_elements: shape.iter().product(),
        }
    }
}

impl Iterator for StridedOffsetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.total_elements {
            return None;
        }

        let physical = self.base_offset
            + self
                .coords
                .iter()
                .zip(self.strides.iter())
                .map(|(c, s)| c * s)
                .sum::<usize>();

        // Odometer increment, last axis fastest
        for dim in (0..self.shape.len()).rev() {
            self.coords[dim] += 1;
            if self.coords[dim] < self.shape[dim] {
                break;
            }
            self.coords[dim] = 0;
        }
        self.current_index += 1;

        Some(physical)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_elements - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StridedOffsetIter<'_> {}
