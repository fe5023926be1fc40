#![no_main]

use libfuzzer_sys::fuzz_target;

use selection_sort::selection as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(v, expected);
});
