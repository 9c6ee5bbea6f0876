use crate::errors::{GenError, GenResult};
use crate::factor::{FactorEntry, FactorTable, DIRECT_LIMIT, MAX_VALUE};
use crate::op::{Op, Program};
use tracing::trace;

/// Generate code that sets the current (zeroed) cell to `value` and leaves
/// the pointer one cell to the right.
///
/// Values above [`DIRECT_LIMIT`] are built with a multiplication loop that
/// uses the next cell as a counter; the counter is back at zero when the loop
/// exits, and the pointer ends on it.
pub fn encode(value: u8, table: &FactorTable) -> GenResult<Program> {
    if value > MAX_VALUE {
        return Err(GenError::ValueOutOfRange(value));
    }

    let mut program = Program::new();
    let nearest = if value > DIRECT_LIMIT {
        nearest_entry(value, table)
    } else {
        None
    };
    let Some(entry) = nearest else {
        program.push_n(Op::Inc, value as usize);
        program.push(Op::Right);
        return Ok(program);
    };

    // >a[<b>-]
    program.push(Op::Right);
    program.push_n(Op::Inc, entry.factor_a as usize);
    program.push(Op::Open);
    program.push(Op::Left);
    program.push_n(Op::Inc, entry.factor_b as usize);
    program.push(Op::Right);
    program.push(Op::Dec);
    program.push(Op::Close);

    let difference = value as i32 - entry.product as i32;
    if difference != 0 {
        program.push(Op::Left);
        program.push_add(difference);
        program.push(Op::Right);
    }

    trace!(value, a = entry.factor_a, b = entry.factor_b, difference, "encoded value");
    Ok(program)
}

/// Search outward from `value` until a probe hits a table product.
///
/// When both probes hit at the same distance, the entry with the larger
/// factor sum is taken, and the lower one on equal sums.
fn nearest_entry(value: u8, table: &FactorTable) -> Option<FactorEntry> {
    let value = value as i32;
    for distance in 0..=MAX_VALUE as i32 {
        let higher = lookup(table, value + distance);
        let lower = lookup(table, value - distance);
        match (higher, lower) {
            (Some(high), Some(low)) => {
                return Some(if high.cost() > low.cost() { high } else { low });
            }
            (Some(found), None) | (None, Some(found)) => return Some(found),
            (None, None) => {}
        }
    }
    None
}

fn lookup(table: &FactorTable, product: i32) -> Option<FactorEntry> {
    u8::try_from(product)
        .ok()
        .and_then(|p| table.get(p))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::BF;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, ">")]
    #[case(1, "+>")]
    #[case(10, "++++++++++>")]
    #[case(11, ">+++[<++++>-]<->")]
    #[case(12, ">+++[<++++>-]")]
    #[case(13, ">+++[<++++>-]<+>")]
    #[case(19, ">+++[<++++++>-]<+>")]
    #[case(29, ">++++[<+++++++>-]<+>")]
    #[case(32, ">++++[<++++++++>-]")]
    #[case(65, ">++++++[<+++++++++++>-]<->")]
    #[case(97, ">++++++++[<++++++++++++>-]<+>")]
    #[case(127, ">+++++++++[<++++++++++++++>-]<+>")]
    fn test_encode(#[case] value: u8, #[case] expected: &str) {
        let table = FactorTable::build();
        assert_eq!(encode(value, &table).unwrap().to_string(), expected);
    }

    #[test]
    fn test_small_values_are_direct() {
        let table = FactorTable::build();
        for value in 0..=DIRECT_LIMIT {
            let program = encode(value, &table).unwrap();
            assert_eq!(program.count(Op::Inc), value as usize);
            assert_eq!(program.count(Op::Open), 0);
            assert_eq!(program.ops().last(), Some(&Op::Right));
            assert_eq!(program.len(), value as usize + 1);
        }
    }

    #[test]
    fn test_tie_prefers_more_expensive_entry() {
        // 17 sits between 16 (4*4, cost 8) and 18 (3*6, cost 9)
        let table = FactorTable::build();
        assert_eq!(encode(17, &table).unwrap().to_string(), ">+++[<++++++>-]<->");
        // 22 sits between 20 (4*5, cost 9) and 24 (4*6, cost 10)
        assert_eq!(encode(22, &table).unwrap().to_string(), ">++++[<++++++>-]<-->");
    }

    #[test]
    fn test_equal_cost_tie_prefers_lower_entry() {
        let table = FactorTable::build();
        // 41 sits between 40 (5*8) and 42 (6*7), both cost 13
        assert_eq!(encode(41, &table).unwrap().to_string(), ">+++++[<++++++++>-]<+>");
        // 68 sits between 66 (6*11) and 70 (7*10), both cost 17
        assert_eq!(encode(68, &table).unwrap().to_string(), ">++++++[<+++++++++++>-]<++>");
    }

    #[test]
    fn test_cost_never_exceeds_direct() {
        let table = FactorTable::build();
        for value in 0..=MAX_VALUE {
            let program = encode(value, &table).unwrap();
            let cost = program.count(Op::Inc)
                + program.count(Op::Dec)
                + program.count(Op::Open)
                + program.count(Op::Close);
            assert!(cost <= value as usize, "value {} costs {}", value, cost);
        }
    }

    #[test]
    fn test_net_move_is_one_right() {
        let table = FactorTable::build();
        for value in 0..=MAX_VALUE {
            let program = encode(value, &table).unwrap();
            let net = program.count(Op::Right) as isize - program.count(Op::Left) as isize;
            assert_eq!(net, 1, "value {}", value);
        }
    }

    #[test]
    fn test_encoded_cell_holds_value() {
        let table = FactorTable::build();
        for value in 0..=MAX_VALUE {
            let code = format!("{}<.>.", encode(value, &table).unwrap());
            let mut bf = BF::new(&code);
            bf.run().unwrap();
            // target cell, then the helper cell which must be cleared
            assert_eq!(bf.output(), &[value, 0][..], "value {}", value);
        }
    }

    #[test]
    fn test_out_of_range() {
        let table = FactorTable::build();
        assert_eq!(encode(128, &table), Err(GenError::ValueOutOfRange(128)));
        assert_eq!(encode(255, &table), Err(GenError::ValueOutOfRange(255)));
    }
}
