// SPDX-License-Identifier: GPL-3.0-or-later
use super::LuminosityMap;

/// Scanner state while walking the midline row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// The previous pixel (if any) was not black.
    Outside,
    /// Inside a contiguous black run that has already been counted.
    Inside,
}

impl LuminosityMap {
    /// Count the maximal contiguous runs of black (intensity zero) pixels
    /// along the row at `height / 2`, scanning left to right.
    ///
    /// Only that single row is examined. Vertical lines drawn across the
    /// image all cross it, and this stays faithful to the behavior the
    /// counts are calibrated against.
    pub(crate) fn midline_runs(&self) -> u32 {
        if self.width() == 0 || self.height() == 0 {
            return 0;
        }
        let width = self.width() as usize;
        let row_base = self.height() as usize / 2 * width;
        let row = &self.as_bytes()[row_base..row_base + width];

        let mut count = 0u32;
        let mut state = ScanState::Outside;
        for &value in row {
            state = match (state, value) {
                (ScanState::Outside, 0) => {
                    count += 1;
                    ScanState::Inside
                }
                (ScanState::Inside, 0) => ScanState::Inside,
                (_, _) => ScanState::Outside,
            };
        }
        count
    }
}

#[cfg(test)]
mod test {
    use super::super::LuminosityMap;

    fn single_row(row: &[u8]) -> LuminosityMap {
        LuminosityMap::from_raw(row.len() as u32, 1, row.to_vec()).unwrap()
    }

    #[test]
    fn all_black_row_is_one_run() {
        assert_eq!(single_row(&[0; 10]).midline_runs(), 1);
    }

    #[test]
    fn row_without_black_is_zero() {
        assert_eq!(single_row(&[254; 10]).midline_runs(), 0);
        assert_eq!(single_row(&[1, 90, 200, 37]).midline_runs(), 0);
    }

    #[test]
    fn alternating_pixels_count_separately() {
        assert_eq!(single_row(&[0, 255, 0, 255, 0]).midline_runs(), 3);
    }

    #[test]
    fn runs_of_varying_width() {
        // Three runs: columns 0-1, 3-5 and 7.
        assert_eq!(single_row(&[0, 0, 255, 0, 0, 0, 255, 0]).midline_runs(), 3);
    }

    #[test]
    fn empty_dimensions_are_zero() {
        assert_eq!(
            LuminosityMap::from_raw(0, 5, Vec::new()).unwrap().midline_runs(),
            0
        );
        assert_eq!(
            LuminosityMap::from_raw(5, 0, Vec::new()).unwrap().midline_runs(),
            0
        );
        assert_eq!(
            LuminosityMap::from_raw(0, 0, Vec::new()).unwrap().midline_runs(),
            0
        );
    }

    #[test]
    fn only_the_midline_row_is_scanned() {
        // 5x3 map: rows 0 and 2 are solid black, row 1 (the midline) has two
        // separated black pixels. The count must come from row 1 alone.
        let data = vec![
            0, 0, 0, 0, 0, // row 0
            0, 255, 255, 255, 0, // row 1
            0, 0, 0, 0, 0, // row 2
        ];
        let map = LuminosityMap::from_raw(5, 3, data).unwrap();
        assert_eq!(map.midline_runs(), 2);
    }

    #[test]
    fn even_height_picks_lower_middle_row() {
        // height 4 scans row index 2.
        let data = vec![
            255, 255, // row 0
            255, 255, // row 1
            0, 255, // row 2
            255, 255, // row 3
        ];
        let map = LuminosityMap::from_raw(2, 4, data).unwrap();
        assert_eq!(map.midline_runs(), 1);
    }

    #[test]
    fn near_black_is_not_black() {
        // Only exact zero counts; a 1 breaks the run.
        assert_eq!(single_row(&[0, 1, 0]).midline_runs(), 2);
        assert_eq!(single_row(&[1, 1, 1]).midline_runs(), 0);
    }

    #[test]
    fn trailing_run_is_counted() {
        assert_eq!(single_row(&[255, 255, 0]).midline_runs(), 1);
    }

    #[test]
    fn scan_is_idempotent() {
        let map = single_row(&[0, 0, 255, 0]);
        assert_eq!(map.midline_runs(), map.midline_runs());
    }
}
