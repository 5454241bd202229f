/// A fixed square convolution kernel: integer weights plus a normalizing
/// divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel<const N: usize> {
    /// Weight matrix, row-major.
    pub weights: [[i32; N]; N],
    /// Divisor applied to the accumulated weighted sum.
    pub divisor: i32,
}

impl<const N: usize> Kernel<N> {
    /// Offset of the kernel center from its top-left corner.
    pub const fn radius() -> isize {
        (N as isize - 1) / 2
    }

    /// Weighted sum of the kernel window centered at `(row, col)` of a flat
    /// `width * height` plane.
    ///
    /// Neighbors outside the plane contribute nothing; they are neither
    /// reflected nor clamped to the edge. The divisor is not applied here.
    pub fn accumulate(
        &self,
        plane: &[u8],
        width: usize,
        height: usize,
        row: usize,
        col: usize,
    ) -> i32 {
        let r = Self::radius();
        let mut sum = 0i32;
        for s in -r..=r {
            let y = row as isize + s;
            if y < 0 || y >= height as isize {
                continue;
            }
            for t in -r..=r {
                let x = col as isize + t;
                if x < 0 || x >= width as isize {
                    continue;
                }
                let weight = self.weights[(s + r) as usize][(t + r) as usize];
                sum += weight * i32::from(plane[y as usize * width + x as usize]);
            }
        }
        sum
    }
}

/// 5x5 Gaussian blur kernel. The divisor equals the weight sum, so blurring
/// a constant plane is the identity.
pub const GAUSSIAN_5X5: Kernel<5> = Kernel {
    weights: [
        [1, 4, 7, 4, 1],
        [4, 16, 26, 16, 4],
        [7, 26, 41, 26, 7],
        [4, 16, 26, 16, 4],
        [1, 4, 7, 4, 1],
    ],
    divisor: 273,
};

/// Sobel horizontal-gradient kernel (responds to vertical edges).
pub const SOBEL_X: Kernel<3> = Kernel {
    weights: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    divisor: 8,
};

/// Sobel vertical-gradient kernel (responds to horizontal edges).
pub const SOBEL_Y: Kernel<3> = Kernel {
    weights: [[1, 2, 1], [0, 0, 0], [-1, -2, -1]],
    divisor: 8,
};

#[cfg(test)]
#[path = "../../tests/unit/filter/kernel.rs"]
mod tests;
