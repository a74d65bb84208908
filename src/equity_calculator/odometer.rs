use fastdivide::DividerU64;

/// Mixed radix counter, digit `i` runs over `[0, radices[i])`
///
/// The first digit changes slowest.
#[derive(Debug)]
pub struct Odometer {
    radices: Vec<usize>,
    digits: Vec<usize>,
    /// one per digit, none for radices that hold a single value
    dividers: Vec<Option<DividerU64>>,
}

impl Odometer {
    pub fn new(radices: Vec<usize>) -> Odometer {
        let digits = vec![0; radices.len()];
        let dividers = radices
            .iter()
            .map(|&r| if r > 1 { Some(DividerU64::divide_by(r as u64)) } else { None })
            .collect();
        Odometer {
            radices,
            digits,
            dividers,
        }
    }

    /// Odometer positioned at a linear index in `[0, size())`
    pub fn at(radices: Vec<usize>, position: u64) -> Odometer {
        let mut odometer = Odometer::new(radices);
        odometer.seek(position);
        odometer
    }

    /// Move to a linear index, digits decoded from the least significant end
    pub fn seek(&mut self, position: u64) {
        let mut pos = position;
        for i in (0..self.radices.len()).rev() {
            match &self.dividers[i] {
                Some(divider) => {
                    let quotient = divider.divide(pos);
                    self.digits[i] = (pos - quotient * self.radices[i] as u64) as usize;
                    pos = quotient;
                }
                None => self.digits[i] = 0,
            }
        }
    }

    /// Number of positions, zero when any digit has an empty range
    pub fn size(&self) -> u64 {
        self.radices.iter().map(|&r| r as u64).product()
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Linear index of the current digits
    pub fn position(&self) -> u64 {
        self.digits
            .iter()
            .zip(self.radices.iter())
            .fold(0u64, |pos, (&d, &r)| pos * r as u64 + d as u64)
    }

    /// Increment the last digit and carry left, false once the first digit overflows
    pub fn next(&mut self) -> bool {
        let mut i = self.digits.len();
        while i > 0 {
            i -= 1;
            self.digits[i] += 1;
            if self.digits[i] < self.radices[i] {
                return true;
            }
            self.digits[i] = 0;
        }
        false
    }
}
