//! Reed-Solomon codec configuration and systematic encoder
//!
//! A [`ReedSolomon`] value bundles the field tables and generator polynomial for
//! one parameter set. It is immutable once built and can be shared freely
//! between threads; each decoding thread keeps its own [`Decoder`] buffers.
//!
//! ## Codeword Layout
//!
//! ```text
//! [ d_0, d_1, ..., d_(k-1), p_0, ..., p_(n-1) ]
//! ```
//!
//! The first symbol is the highest-degree coefficient of the codeword
//! polynomial. Parity is the remainder of `data(x) · x^n` divided by g(x).

use super::decoder::Decoder;
use super::error::{RsError, RsResult};
use super::galois::GaloisField;
use super::generator::GeneratorPolynomial;
use super::symbol::Symbol;
use super::syndrome;
use super::types::CodecParams;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomon {
    params: CodecParams,
    field: GaloisField,
    generator: GeneratorPolynomial,
}

impl ReedSolomon {
    /// Configure a codec for the field defined by `polynomial`, appending
    /// `parity_len` symbols whose generator roots start at α^`root_offset`
    pub fn new(polynomial: u32, parity_len: usize, root_offset: u32) -> RsResult<Self> {
        Self::from_params(CodecParams::new(polynomial, parity_len, root_offset))
    }

    pub fn from_params(params: CodecParams) -> RsResult<Self> {
        let field = GaloisField::new(params.polynomial)?;

        let max = field.size() - 1;
        if params.parity_len == 0 || params.parity_len > max {
            return Err(RsError::InvalidParityLength {
                parity_len: params.parity_len,
                max,
            });
        }

        let generator =
            GeneratorPolynomial::new(&field, params.parity_len, params.root_offset as usize);

        debug!(
            "Configured Reed-Solomon codec ({}): {}-bit symbols, up to {} data symbols, corrects {} errors",
            params,
            field.bits(),
            field.size() - params.parity_len,
            params.capacity()
        );

        Ok(Self {
            params,
            field,
            generator,
        })
    }

    pub fn params(&self) -> CodecParams {
        self.params
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn generator(&self) -> &GeneratorPolynomial {
        &self.generator
    }

    pub fn parity_len(&self) -> usize {
        self.params.parity_len
    }

    pub fn root_offset(&self) -> u32 {
        self.params.root_offset
    }

    pub fn symbol_bits(&self) -> u32 {
        self.field.bits()
    }

    /// Longest codeword (data plus parity) the field can address
    pub fn max_codeword_len(&self) -> usize {
        self.field.size()
    }

    pub fn max_data_len(&self) -> usize {
        self.field.size() - self.params.parity_len
    }

    /// Number of symbol errors that can be corrected per codeword
    pub fn capacity(&self) -> usize {
        self.params.capacity()
    }

    /// Compute parity for `data` and write it to the first `parity_len`
    /// symbols of `parity`
    pub fn encode_into<S: Symbol>(&self, data: &[S], parity: &mut [S]) -> RsResult<()> {
        let parity_len = self.parity_len();
        self.check_symbol_width::<S>()?;
        self.check_length(data.len().saturating_add(parity_len))?;
        if parity.len() < parity_len {
            return Err(RsError::BufferTooShort {
                needed: parity_len,
                actual: parity.len(),
            });
        }
        self.check_symbols(data)?;

        let parity = &mut parity[..parity_len];
        let taps = &self.generator.coefficients()[1..];
        parity.fill(S::default());

        // LFSR division: feed each data symbol into the top of the register,
        // shift by one and add feedback times the generator's lower terms
        for &symbol in data {
            let feedback = parity[0].element() ^ symbol.element();
            parity.copy_within(1.., 0);
            parity[parity_len - 1] = S::default();

            if feedback != 0 {
                for (p, &tap) in parity.iter_mut().zip(taps) {
                    *p = S::from_element(p.element() ^ self.field.mul(feedback, tap));
                }
            }
        }

        Ok(())
    }

    /// Encode the first `data_len` symbols of `codeword` and write parity
    /// directly after them
    pub fn encode_in_place<S: Symbol>(&self, data_len: usize, codeword: &mut [S]) -> RsResult<()> {
        let needed = data_len.saturating_add(self.parity_len());
        if codeword.len() < needed {
            return Err(RsError::BufferTooShort {
                needed,
                actual: codeword.len(),
            });
        }
        let (data, parity) = codeword.split_at_mut(data_len);
        self.encode_into(data, parity)
    }

    /// Correct up to [`capacity`](Self::capacity) symbol errors in place
    ///
    /// `codeword` holds `data_len` data symbols followed by the parity. Returns
    /// the number of corrected symbols. When the block is uncorrectable it is
    /// left exactly as received.
    ///
    /// This allocates working buffers for the call; use [`decoder`](Self::decoder)
    /// to reuse them across many blocks.
    pub fn correct<S: Symbol>(&self, data_len: usize, codeword: &mut [S]) -> RsResult<usize> {
        self.decoder().correct(data_len, codeword)
    }

    /// Whether the block has all-zero syndromes, i.e. no detectable errors
    pub fn is_codeword<S: Symbol>(&self, data_len: usize, codeword: &[S]) -> RsResult<bool> {
        let received = self.checked_codeword(data_len, codeword)?;
        let mut syndromes = vec![0u16; self.parity_len()];
        Ok(syndrome::compute(
            &self.field,
            &self.generator,
            received,
            &mut syndromes,
        ))
    }

    /// Decoder with working buffers sized for this codec
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Validate a received block and return the `data_len + parity_len`
    /// symbols that make up the codeword
    pub(crate) fn checked_codeword<'c, S: Symbol>(
        &self,
        data_len: usize,
        codeword: &'c [S],
    ) -> RsResult<&'c [S]> {
        let len = data_len.saturating_add(self.parity_len());
        self.check_symbol_width::<S>()?;
        self.check_length(len)?;
        if codeword.len() < len {
            return Err(RsError::BufferTooShort {
                needed: len,
                actual: codeword.len(),
            });
        }
        let received = &codeword[..len];
        self.check_symbols(received)?;
        Ok(received)
    }

    fn check_symbol_width<S: Symbol>(&self) -> RsResult<()> {
        if S::BITS < self.field.bits() {
            return Err(RsError::SymbolTooNarrow {
                symbol_bits: S::BITS,
                field_bits: self.field.bits(),
            });
        }
        Ok(())
    }

    fn check_length(&self, len: usize) -> RsResult<()> {
        if len > self.max_codeword_len() {
            return Err(RsError::CodewordTooLong {
                len,
                max: self.max_codeword_len(),
            });
        }
        Ok(())
    }

    fn check_symbols<S: Symbol>(&self, symbols: &[S]) -> RsResult<()> {
        // A buffer exactly as wide as the field cannot hold an invalid symbol
        if S::BITS == self.field.bits() {
            return Ok(());
        }
        let max = self.field.max_element();
        match symbols.iter().position(|s| s.element() > max) {
            Some(index) => Err(RsError::SymbolOutOfRange {
                index,
                value: symbols[index].element() as u32,
                max: max as u32,
            }),
            None => Ok(()),
        }
    }
}
