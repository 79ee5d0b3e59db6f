use cryptal_auth::hash::sha512;
use hex_literal::hex;

fn expect_sha512_eq(input: &[u8], expected: &[u8; 64]) {
    let got = sha512::hash(input);

    assert_eq!(
        &got,
        expected,
        "Digest mismatch for input of {} bytes\nExpected {}\nGot      {}",
        input.len(),
        hex::encode(expected),
        hex::encode(got),
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS (FIPS 180-4)
// -------------------------------------------------------

#[test]
fn sha512_empty_vector() {
    expect_sha512_eq(
        &[],
        &hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        ),
    );
}

#[test]
fn sha512_abc_vector() {
    expect_sha512_eq(
        b"abc",
        &hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        ),
    );
}

#[test]
fn sha512_known_phrase() {
    expect_sha512_eq(
        b"The quick brown fox jumps over the lazy dog",
        &hex!(
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64"
            "2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6"
        ),
    );
}

// -------------------------------------------------------
// 2. SURFACE
// -------------------------------------------------------

#[test]
fn sha512_exported_constants() {
    assert_eq!(sha512::BYTES, 64);
    assert_eq!(sha512::PRIMITIVE, "sha512");
}

#[test]
fn sha512_is_deterministic_across_block_boundaries() {
    for len in [0, 1, 111, 112, 127, 128, 129, 255, 256] {
        let buf = vec![0x5Au8; len];
        assert_eq!(sha512::hash(&buf), sha512::hash(&buf), "len = {len}");
    }
}

#[test]
fn sha512_single_bit_flip_changes_digest() {
    let mut buf = vec![0u8; 200];
    let base = sha512::hash(&buf);

    buf[199] ^= 1;
    assert_ne!(sha512::hash(&buf), base);
}
