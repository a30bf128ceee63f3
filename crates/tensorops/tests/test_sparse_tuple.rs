//! Tests for sparse tuple encoding.
//!
//! Covers:
//! - the reference encoding of `[[1,2],[1],[1,2,3,4,5],[2,5,2,6]]`
//! - decode(encode(rows)) == rows, including empty rows anywhere
//! - array views of the triple
//! - rejection of malformed triples

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tensorops::{SparseTuple, TensorError, decode_sparse_tuple, sparse_tuple_from};

#[test]
fn test_reference_encoding() {
    let rows = vec![vec![1, 2], vec![1], vec![1, 2, 3, 4, 5], vec![2, 5, 2, 6]];
    let st = sparse_tuple_from(&rows).unwrap();

    let expected_indices: [[usize; 2]; 12] = [
        [0, 0],
        [0, 1],
        [1, 0],
        [2, 0],
        [2, 1],
        [2, 2],
        [2, 3],
        [2, 4],
        [3, 0],
        [3, 1],
        [3, 2],
        [3, 3],
    ];
    assert_eq!(st.indices(), &expected_indices);
    assert_eq!(st.values(), &[1, 2, 1, 1, 2, 3, 4, 5, 2, 5, 2, 6]);
    assert_eq!(st.shape(), [4, 5]);
    assert_eq!(st.num_rows(), 4);
    assert_eq!(st.max_row_len(), 5);

    let idx = st.indices_array();
    assert_eq!(idx.shape(), &[12, 2]);
    assert_eq!(idx.column(0).to_vec(), vec![0, 0, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3]);

    assert_eq!(decode_sparse_tuple(&st), rows);
}

#[test]
fn test_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(2018);
    for _ in 0..50 {
        let nrows = rng.random_range(1..12);
        let mut rows: Vec<Vec<i32>> = (0..nrows)
            .map(|_| {
                let len = rng.random_range(0..8);
                (0..len).map(|_| rng.random_range(-100..100)).collect()
            })
            .collect();
        if rows.iter().all(|r| r.is_empty()) {
            rows[0].push(1);
        }

        let st = sparse_tuple_from(&rows).unwrap();
        assert_eq!(st.shape()[0], rows.len());
        assert_eq!(
            st.shape()[1],
            rows.iter().map(|r| r.len()).max().unwrap_or(0)
        );
        assert_eq!(decode_sparse_tuple(&st), rows);
    }
}

#[test]
fn test_round_trip_through_parts() {
    let rows = vec![vec![10u16], vec![], vec![20, 30]];
    let (indices, values, shape) = sparse_tuple_from(&rows).unwrap().into_parts();
    let rebuilt = SparseTuple::new(indices, values, shape).unwrap();
    assert_eq!(decode_sparse_tuple(&rebuilt), rows);
}

#[test]
fn test_trailing_empty_rows_kept() {
    let st = SparseTuple::new(vec![[0, 0]], vec![5], [3, 1]).unwrap();
    assert_eq!(decode_sparse_tuple(&st), vec![vec![5], vec![], vec![]]);
}

#[test]
fn test_empty_input_rejected() {
    let rows: Vec<Vec<i32>> = vec![vec![], vec![], vec![]];
    let err = sparse_tuple_from(&rows).unwrap_err();
    assert!(matches!(err, TensorError::EmptySequences { rows: 3 }));
}

#[test]
fn test_malformed_triples_rejected() {
    assert!(matches!(
        SparseTuple::new(vec![[0, 0], [1, 0]], vec![1], [2, 1]),
        Err(TensorError::LengthMismatch { .. })
    ));
    assert!(matches!(
        SparseTuple::new(vec![[1, 0], [0, 0]], vec![1, 2], [2, 1]),
        Err(TensorError::UnorderedRows { .. })
    ));
    assert!(matches!(
        SparseTuple::new(vec![[0, 0], [0, 2]], vec![1, 2], [1, 3]),
        Err(TensorError::NonContiguousColumn { .. })
    ));
    assert!(matches!(
        SparseTuple::new(vec![[3, 0]], vec![1], [2, 1]),
        Err(TensorError::RowOutOfRange { .. })
    ));
}
