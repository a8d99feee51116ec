/// Moves the element at `from` to `to`, shifting the elements in between.
/// Out-of-range indices leave the slice untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_forward_and_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        array_move(&mut items, 3, 0);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn ignores_out_of_range_indices() {
        let mut items = vec![1, 2, 3];
        array_move(&mut items, 5, 0);
        array_move(&mut items, 0, 3);
        assert_eq!(items, vec![1, 2, 3]);
    }
}
