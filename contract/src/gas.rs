//! Static gas settings for contract transactions.
//!
//! No fee estimation: every transaction carries the same price and limit and
//! is sent as a legacy (type-0) transaction.

use ethers::{
    abi::Detokenize, contract::FunctionCall, providers::Middleware, types::U256,
};
use std::borrow::Borrow;

/// A fixed gas price and gas limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticGas {
    /// Gas price in wei.
    pub price: U256,
    /// Gas limit in gas units.
    pub limit: U256,
}

impl StaticGas {
    /// Roughly 3 gwei and a 3M gas limit, enough for Sepolia.
    pub const SEPOLIA: Self = Self {
        price: U256([3_000_000_000, 0, 0, 0]),
        limit: U256([3_000_000, 0, 0, 0]),
    };

    /// Turn `call` into a legacy transaction with this price and limit.
    pub fn apply<B, M, D>(&self, call: FunctionCall<B, M, D>) -> FunctionCall<B, M, D>
    where
        B: Borrow<M>,
        M: Middleware,
        D: Detokenize,
    {
        call.legacy().gas(self.limit).gas_price(self.price)
    }
}
