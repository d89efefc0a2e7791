//! DSA test vectors from RFC 6979 Appendix A.2.1 and key handling tests.

#![cfg(feature = "dsa")]

use num_bigint::BigUint;
use rfc6979::{
    dsa::{Components, SigningKey, VerifyingKey},
    signature::{DigestSigner, DigestVerifier},
    Error, Signature,
};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

const MESSAGE: &[u8] = b"sample";
const MESSAGE_2: &[u8] = b"test";

fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

fn dsa_1024_components() -> Components {
    let p = uint(
        "86F5CA03DCFEB225063FF830A0C769B9DD9D6153AD91D7CE27F787C43278B447\
         E6533B86B18BED6E8A48B784A14C252C5BE0DBF60B86D6385BD2F12FB763ED88\
         73ABFD3F5BA2E0A8C0A59082EAC056935E529DAF7C610467899C77ADEDFC846C\
         881870B7B19B2B58F9BE0521A17002E3BDD6B86685EE90B3D9A1B02B782B1779",
    );
    let q = uint("996F967F6C8E388D9E28D01E205FBA957A5698B1");
    let g = uint(
        "07B0F92546150B62514BB771E2A0C0CE387F03BDA6C56B505209FF25FD3C133D\
         89BBCD97E904E09114D9A7DEFDEADFC9078EA544D2E401AEECC40BB9FBBF78FD\
         87995A10A1C27CB7789B594BA7EFB5C4326A9FE59A070E136DB77175464ADCA4\
         17BE5DCE2F40D10A46A3A3943F26AB7FD9C0398FF8C76EE0A56826A8A88F1DBD",
    );

    Components::from_components(p, q, g).unwrap()
}

fn dsa_1024_y() -> BigUint {
    uint(
        "5DF5E01DED31D0297E274E1691C192FE5868FEF9E19A84776454B100CF16F653\
         92195A38B90523E2542EE61871C0440CB87C322FC4B4D2EC5E1E7EC766E1BE8D\
         4CE935437DC11C3C8FD426338933EBFE739CB3465F4D3668C5E473508253B1E6\
         82F65CBDC4FAE93C2EA212390E54905A86E2223170B44EAA7DA5DD9FFCFB7F3B",
    )
}

fn dsa_1024_signing_key() -> SigningKey {
    let x = uint("411602CB19A6CCC34494D79D98EF1E7ED5AF25F7");
    SigningKey::from_private(dsa_1024_components(), x).unwrap()
}

/// Create a signature container from the two components in their textual hexadecimal form
fn from_str_signature(r: &str, s: &str) -> Signature {
    Signature::from_components(uint(r), uint(s)).unwrap()
}

/// Sign with the 1024-bit key, truncating the digest to the byte length of q
fn generate_1024_signature<D>(data: &[u8]) -> Signature
where
    D: Digest + digest::core_api::BlockSizeUser,
{
    dsa_1024_signing_key().sign_message::<D>(data).unwrap()
}

/// Return the RFC 6979 test cases
///
/// Each case is the expected signature, a function producing it with this
/// crate, and the function hashing the message the same way.
#[allow(clippy::type_complexity)]
fn cases() -> Vec<(Signature, Box<dyn Fn() -> Signature>, Box<dyn Fn() -> Vec<u8>>)> {
    macro_rules! case {
        ($digest:ty, $msg:expr, $r:expr, $s:expr) => {
            (
                from_str_signature($r, $s),
                Box::new(|| generate_1024_signature::<$digest>($msg)),
                Box::new(|| <$digest>::digest($msg).to_vec()),
            )
        };
    }

    vec![
        case!(
            Sha1,
            MESSAGE,
            "2E1A0C2562B2912CAAF89186FB0F42001585DA55",
            "29EFB6B0AFF2D7A68EB70CA313022253B9A88DF5"
        ),
        case!(
            Sha1,
            MESSAGE_2,
            "42AB2052FD43E123F0607F115052A67DCD9C5C77",
            "183916B0230D45B9931491D4C6B0BD2FB4AAF088"
        ),
        case!(
            Sha224,
            MESSAGE,
            "4BC3B686AEA70145856814A6F1BB53346F02101E",
            "410697B92295D994D21EDD2F4ADA85566F6F94C1"
        ),
        case!(
            Sha224,
            MESSAGE_2,
            "6868E9964E36C1689F6037F91F28D5F2C30610F2",
            "49CEC3ACDC83018C5BD2674ECAAD35B8CD22940F"
        ),
        case!(
            Sha256,
            MESSAGE,
            "81F2F5850BE5BC123C43F71A3033E9384611C545",
            "4CDD914B65EB6C66A8AAAD27299BEE6B035F5E89"
        ),
        case!(
            Sha256,
            MESSAGE_2,
            "22518C127299B0F6FDC9872B282B9E70D0790812",
            "6837EC18F150D55DE95B5E29BE7AF5D01E4FE160"
        ),
        case!(
            Sha384,
            MESSAGE,
            "07F2108557EE0E3921BC1774F1CA9B410B4CE65A",
            "54DF70456C86FAC10FAB47C1949AB83F2C6F7595"
        ),
        case!(
            Sha384,
            MESSAGE_2,
            "854CF929B58D73C3CBFDC421E8D5430CD6DB5E66",
            "91D0E0F53E22F898D158380676A871A157CDA622"
        ),
        case!(
            Sha512,
            MESSAGE,
            "16C3491F9B8C3FBBDD5E7A7B667057F0D8EE8E1B",
            "02C36A127A7B89EDBB72E4FFBC71DABC7D4FC69C"
        ),
        case!(
            Sha512,
            MESSAGE_2,
            "8EA47E475BA8AC6F2D821DA3BD212D11A3DEB9A0",
            "7C670C7AD72B6C050C109E1790008097125433E8"
        ),
    ]
}

#[test]
fn rfc6979_signatures() {
    for (idx, (expected, gen_fn, _)) in cases().into_iter().enumerate() {
        assert_eq!(expected, gen_fn(), "{}th test case", idx);
    }
}

#[test]
fn rfc6979_signatures_verify() {
    let signing_key = dsa_1024_signing_key();
    let verifying_key = signing_key.verifying_key();

    for (idx, (expected, _, hash_fn)) in cases().into_iter().enumerate() {
        assert_eq!(
            verifying_key.verify_prehash(&hash_fn(), &expected),
            Ok(()),
            "{}th test case",
            idx
        );
    }
}

#[test]
fn public_component_is_derived() {
    let signing_key = dsa_1024_signing_key();
    assert_eq!(signing_key.verifying_key().y(), &dsa_1024_y());

    let verifying_key =
        VerifyingKey::from_components(dsa_1024_components(), dsa_1024_y()).unwrap();
    let x = signing_key.x().clone();
    assert_eq!(SigningKey::from_components(verifying_key, x).unwrap(), signing_key);
}

#[test]
fn signatures_are_deterministic() {
    let signing_key = dsa_1024_signing_key();

    let first = signing_key.sign_message::<Sha256>(b"deterministic").unwrap();
    let second = signing_key.sign_message::<Sha256>(b"deterministic").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_bytes(20), second.to_bytes(20));
    assert_ne!(first, signing_key.sign_message::<Sha256>(b"other").unwrap());
}

#[test]
fn digest_traits_round_trip() {
    let signing_key = dsa_1024_signing_key();
    let verifying_key = signing_key.verifying_key();

    let signature: Signature = signing_key.sign_digest(Sha256::new_with_prefix(MESSAGE));
    assert_eq!(signature, generate_1024_signature::<Sha256>(MESSAGE));

    assert!(verifying_key
        .verify_digest(Sha256::new_with_prefix(MESSAGE), &signature)
        .is_ok());
    assert!(verifying_key
        .verify_digest(Sha256::new_with_prefix(MESSAGE_2), &signature)
        .is_err());
}

#[test]
fn additional_data_still_verifies() {
    let signing_key = dsa_1024_signing_key();
    let hash = Sha256::digest(MESSAGE);

    let plain = signing_key.sign_prehash::<Sha256>(&hash[..20]).unwrap();
    let extra = signing_key
        .sign_prehash_with_data::<Sha256>(&hash[..20], b"additional data")
        .unwrap();

    assert_ne!(plain, extra);
    assert_eq!(signing_key.verifying_key().verify_prehash(&hash, &extra), Ok(()));
}

#[test]
fn tampered_signatures_are_rejected() {
    let signing_key = dsa_1024_signing_key();
    let verifying_key = signing_key.verifying_key();
    let hash = Sha256::digest(MESSAGE);
    let signature = signing_key.sign_prehash::<Sha256>(&hash[..20]).unwrap();

    let tampered =
        Signature::from_components(signature.r().clone(), signature.s() + 1u32).unwrap();
    assert_eq!(
        verifying_key.verify_prehash(&hash, &tampered),
        Err(Error::InvalidSignature)
    );

    let q = verifying_key.components().q().clone();
    let out_of_range = Signature::from_components(q, signature.s().clone()).unwrap();
    assert_eq!(
        verifying_key.verify_prehash(&hash, &out_of_range),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn unaligned_subgroup_order_is_refused() {
    // 2 generates the subgroup of order 11 in (Z/23Z)*
    let components = Components::from_components(
        BigUint::from(23u32),
        BigUint::from(11u32),
        BigUint::from(2u32),
    )
    .unwrap();
    assert!(!components.is_byte_aligned());

    let signing_key = SigningKey::from_private(components, BigUint::from(3u32)).unwrap();
    assert_eq!(
        signing_key.sign_prehash::<Sha256>(&[0x42; 32]),
        Err(Error::InvalidDomainParameters)
    );
}

#[test]
fn malformed_keys_are_refused() {
    let small = |p: u32, q: u32, g: u32| {
        Components::from_components(BigUint::from(p), BigUint::from(q), BigUint::from(g))
    };

    assert_eq!(small(1, 11, 2), Err(Error::InvalidDomainParameters));
    assert_eq!(small(23, 11, 23), Err(Error::InvalidDomainParameters));
    assert_eq!(small(23, 1, 2), Err(Error::InvalidDomainParameters));

    let q = dsa_1024_components().q().clone();
    assert_eq!(
        SigningKey::from_private(dsa_1024_components(), BigUint::from(0u32)),
        Err(Error::InvalidPrivateKey)
    );
    assert_eq!(
        SigningKey::from_private(dsa_1024_components(), q),
        Err(Error::InvalidPrivateKey)
    );

    assert_eq!(
        VerifyingKey::from_components(dsa_1024_components(), BigUint::from(1u32)),
        Err(Error::InvalidPublicKey)
    );
    assert_eq!(
        VerifyingKey::from_components(dsa_1024_components(), dsa_1024_y() + 1u32),
        Err(Error::InvalidPublicKey)
    );
}
