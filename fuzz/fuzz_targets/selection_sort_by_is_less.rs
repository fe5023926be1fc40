#![no_main]

use libfuzzer_sys::fuzz_target;

use selection_sort::selection as test_sort;

// The first byte picks how many high bits of each element, 0 to 8, take part in the comparison.
// Fewer bits produce many equivalent but distinguishable elements.
fuzz_target!(|data: &[u8]| {
    let Some((&mask_bits, rest)) = data.split_first() else {
        return;
    };
    let mask = !u8::MAX.checked_shr(u32::from(mask_bits % 9)).unwrap_or(0);

    let mut v = rest.to_vec();
    test_sort::sort_by_is_less(&mut v, |a, b| (a & mask) < (b & mask));

    assert!(v.windows(2).all(|w| (w[0] & mask) <= (w[1] & mask)));

    let mut multiset_before = rest.to_vec();
    multiset_before.sort_unstable();
    let mut multiset_after = v;
    multiset_after.sort_unstable();
    assert_eq!(multiset_before, multiset_after);
});
