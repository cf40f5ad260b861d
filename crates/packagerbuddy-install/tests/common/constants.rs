//! Shared constants for test infrastructure

pub const FOO: &str = "foo";
pub const BAR: &str = "bar";

pub const VERSION_1_0_0: &str = "1.0.0";
pub const VERSION_2_0_0: &str = "2.0.0";

pub const FOO_TAR_GZ_TEMPLATE: &str = "https://example.com/{version}/foo.tar.gz";
pub const FOO_ZIP_TEMPLATE: &str = "https://example.com/{version}/foo.zip";
pub const FOO_PLATFORM_TEMPLATE: &str =
    "https://example.com/{version}/foo-{version}-linux-x64.tar.gz";
pub const FOO_RAR_TEMPLATE: &str = "https://example.com/{version}/foo.rar";

pub const FOO_BINARY: &[u8] = b"#!/bin/sh\necho foo\n";
pub const README: &[u8] = b"foo readme\n";
