//! Macros for export

/// A basic for loop for const contexts
#[macro_export]
macro_rules! const_for {
    ($i:ident in $range:block $b:block) => {
        let mut $i: usize = $range.start.wrapping_sub(1);
        loop {
            // the increment must happen before `$b` so that `continue`s still cause it
            $i = $i.wrapping_add(1);
            if $i >= $range.end {
                break
            }
            $b;
        }
    };
    ($i:ident in $range:block.rev() $b:block) => {
        let mut $i: usize = $range.end;
        loop {
            if $i <= $range.start {
                break
            }
            $i = $i.wrapping_sub(1);
            $b;
        }
    };
}

#[test]
fn const_for_ranges() {
    let mut sum = 0;
    const_for!(i in {0..5usize} {
        if i == 2 {
            continue
        }
        sum += i;
    });
    assert_eq!(sum, 8);
    let mut order = [0usize; 3];
    let mut j = 0;
    const_for!(i in {3..6usize}.rev() {
        order[j] = i;
        j += 1;
    });
    assert_eq!(order, [5, 4, 3]);
}
