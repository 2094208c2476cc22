pub mod configuration;
pub mod constants;
pub mod storage;
#[cfg(test)]
pub mod test_util;
