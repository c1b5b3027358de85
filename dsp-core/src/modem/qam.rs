//! QAM constellation mapping and single-carrier modulation

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{DspError, Result};

/// Square QAM constellations with natural binary (non-Gray) mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constellation {
    /// 4-QAM (QPSK): 2 bits per symbol
    Qam4,

    /// 16-QAM: 4 bits per symbol
    Qam16,
}

/// 4-QAM map, indexed by the symbol value of the bit pair (MSB first)
const QAM4_TABLE: [[f64; 2]; 4] = [[1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]];

/// 16-QAM map, indexed by the symbol value of the bit quad (MSB first)
const QAM16_TABLE: [[f64; 2]; 16] = [
    [1.0, 1.0],
    [1.0, 3.0],
    [3.0, 1.0],
    [3.0, 3.0],
    [1.0, -1.0],
    [1.0, -3.0],
    [3.0, -1.0],
    [3.0, -3.0],
    [-1.0, 1.0],
    [-1.0, 3.0],
    [-3.0, 1.0],
    [-3.0, 3.0],
    [-1.0, -1.0],
    [-1.0, -3.0],
    [-3.0, -1.0],
    [-3.0, -3.0],
];

impl Constellation {
    /// Number of points in the constellation
    pub fn order(self) -> usize {
        match self {
            Constellation::Qam4 => 4,
            Constellation::Qam16 => 16,
        }
    }

    /// Bits carried by one symbol
    pub fn bits_per_symbol(self) -> usize {
        match self {
            Constellation::Qam4 => 2,
            Constellation::Qam16 => 4,
        }
    }

    fn table(self) -> &'static [[f64; 2]] {
        match self {
            Constellation::Qam4 => &QAM4_TABLE,
            Constellation::Qam16 => &QAM16_TABLE,
        }
    }

    /// Complex amplitude for one symbol index
    pub fn point(self, symbol: u8) -> Result<Complex64> {
        let table = self.table();
        let entry = table.get(symbol as usize).ok_or(DspError::invalid(
            "symbol",
            "symbol index exceeds constellation order",
        ))?;
        Ok(Complex64::new(entry[0], entry[1]))
    }

    /// Map symbol indices to constellation points
    pub fn map_symbols(self, symbols: &[u8]) -> Result<Vec<Complex64>> {
        symbols.iter().map(|&s| self.point(s)).collect()
    }

    /// Map a bitstream (values 0/1, MSB of each symbol first) to
    /// constellation points
    ///
    /// # Arguments
    /// * `bits` - Bit values; length must be a multiple of
    ///   [`bits_per_symbol`](Self::bits_per_symbol)
    pub fn map_bits(self, bits: &[u8]) -> Result<Vec<Complex64>> {
        let per_symbol = self.bits_per_symbol();
        if bits.len() % per_symbol != 0 {
            return Err(DspError::invalid(
                "bits",
                "bit count must be a multiple of bits-per-symbol",
            ));
        }
        if bits.iter().any(|&b| b > 1) {
            return Err(DspError::invalid("bits", "bits must be 0 or 1"));
        }

        bits.chunks(per_symbol)
            .map(|word| {
                let symbol = word.iter().fold(0u8, |acc, &b| (acc << 1) | b);
                self.point(symbol)
            })
            .collect()
    }
}

/// Maps complex symbol amplitudes onto a passband carrier
pub struct QamModulator {
    /// Carrier frequency in Hz
    carrier_freq: f64,

    /// Sampling rate in Hz
    sample_rate: f64,

    /// Samples emitted per symbol
    samples_per_symbol: usize,
}

impl QamModulator {
    /// Create a modulator
    ///
    /// # Arguments
    /// * `carrier_freq` - Carrier frequency in Hz
    /// * `sample_rate` - Sampling rate in Hz (> 0)
    /// * `symbol_duration` - Symbol period in seconds; must span at least
    ///   one sample
    pub fn new(carrier_freq: f64, sample_rate: f64, symbol_duration: f64) -> Result<Self> {
        if !(sample_rate > 0.0) {
            return Err(DspError::invalid(
                "sample_rate",
                "sampling rate must be > 0",
            ));
        }
        if !(symbol_duration > 0.0) {
            return Err(DspError::invalid(
                "symbol_duration",
                "symbol duration must be > 0",
            ));
        }

        let samples_per_symbol = (symbol_duration * sample_rate).round() as usize;
        if samples_per_symbol == 0 {
            return Err(DspError::invalid(
                "symbol_duration",
                "symbol period shorter than one sample",
            ));
        }

        Ok(Self {
            carrier_freq,
            sample_rate,
            samples_per_symbol,
        })
    }

    /// Samples emitted per symbol
    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    /// Produce the real passband waveform for a symbol sequence
    ///
    /// Each symbol amplitude rides the complex carrier for one symbol
    /// period; the transmitted waveform is the real part. The carrier phase
    /// restarts with every symbol.
    pub fn modulate(&self, symbols: &[Complex64]) -> Vec<f64> {
        let mut waveform = Vec::with_capacity(symbols.len() * self.samples_per_symbol);

        for &amplitude in symbols {
            for n in 0..self.samples_per_symbol {
                let t = n as f64 / self.sample_rate;
                let phase = -2.0 * PI * self.carrier_freq * t;
                let carrier = Complex64::new(phase.cos(), phase.sin());
                waveform.push((amplitude * carrier).re);
            }
        }
        waveform
    }
}
