//! Tests for lane implementations.

#[cfg(test)]
mod tests {
    use crate::simd::chunks::*;
    use crate::simd::portable::*;
    use crate::simd::traits::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ========================================================================
    // F32x4 tests
    // ========================================================================

    #[test]
    fn test_f32x4_zero() {
        let v = F32x4::zero();
        assert!(v.to_vec().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_f32x4_splat() {
        let v = F32x4::splat(2.5);
        assert!(v.to_vec().iter().all(|&x| approx_eq(x, 2.5)));
    }

    #[test]
    fn test_f32x4_load_store() {
        let input = [1.0f32, 2.0, 3.0, 4.0];
        let v = F32x4::load(&input);
        let mut output = [0.0f32; 4];
        v.store(&mut output);
        assert_eq!(input, output);
    }

    #[test]
    fn test_f32x4_load_from_longer_slice() {
        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = F32x4::load(&input[2..]);
        assert_eq!(v.to_vec(), vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_f32x4_add_mul() {
        let a = F32x4::load(&[1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::load(&[4.0, 3.0, 2.0, 1.0]);
        assert!(a.add(b).to_vec().iter().all(|&x| approx_eq(x, 5.0)));
        assert_eq!(a.mul(b).to_vec(), vec![4.0, 6.0, 6.0, 4.0]);
    }

    #[test]
    fn test_f32x4_horizontal_sum() {
        let v = F32x4::load(&[1.0, 2.0, 3.0, 4.0]);
        assert!(approx_eq(v.horizontal_sum(), 10.0));
    }

    #[test]
    fn test_f32x4_dot_and_scale() {
        let a = F32x4::load(&[1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::load(&[4.0, 3.0, 2.0, 1.0]);
        assert!(approx_eq(a.dot(b), 20.0));
        assert_eq!(a.scale(0.5).to_vec(), vec![0.5, 1.0, 1.5, 2.0]);
    }

    // ========================================================================
    // F32x8 / F32x16 tests
    // ========================================================================

    #[test]
    fn test_f32x8_add_and_sum() {
        let a = F32x8::load(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = F32x8::load(&[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert!(a.add(b).to_vec().iter().all(|&x| approx_eq(x, 9.0)));
        assert!(approx_eq(a.horizontal_sum(), 36.0)); // 1+2+...+8 = 36
    }

    #[test]
    fn test_f32x8_horizontal_sum_first_to_last() {
        let input = [1.0e8f32, 1.0, -1.0e8, 1.0, 0.5, 0.25, 3.0, -2.0];
        let expected = input.iter().skip(1).fold(input[0], |acc, &x| acc + x);
        assert_eq!(F32x8::load(&input).horizontal_sum(), expected);
    }

    #[test]
    fn test_f32x16_halves() {
        let input: Vec<f32> = (1..=16).map(|x| x as f32).collect();
        let v = F32x16::load(&input);
        assert_eq!(v.to_vec(), input);

        let doubled = v.mul(F32x16::splat(2.0)).to_vec();
        for i in 0..16 {
            assert!(approx_eq(doubled[i], input[i] * 2.0));
        }

        assert!(approx_eq(v.horizontal_sum(), 136.0));
        assert!(approx_eq(v.add(F32x16::zero()).horizontal_sum(), 136.0));
    }

    #[test]
    fn test_f32x16_store_leaves_rest() {
        let v = F32x16::splat(1.0);
        let mut out = [0.0f32; 18];
        v.store(&mut out);
        assert!(out[..16].iter().all(|&x| x == 1.0));
        assert_eq!(&out[16..], &[0.0, 0.0]);
    }

    // ========================================================================
    // F64x4 tests
    // ========================================================================

    #[test]
    fn test_f64x4_ops() {
        let a = F64x4::load(&[1.0, 2.0, 3.0, 4.0]);
        let b = F64x4::splat(0.5);
        assert_eq!(a.add(b).to_vec(), vec![1.5, 2.5, 3.5, 4.5]);
        assert_eq!(a.mul(b).to_vec(), vec![0.5, 1.0, 1.5, 2.0]);
        assert!((a.horizontal_sum() - 10.0).abs() < 1e-12);
        assert_eq!(F64x4::zero().to_vec(), vec![0.0; 4]);
    }

    // ========================================================================
    // Integer lane tests
    // ========================================================================

    #[test]
    fn test_i32x4_wrapping() {
        let a = I32x4::load(&[i32::MAX, i32::MIN, 7, -3]);
        let b = I32x4::load(&[1, -1, 6, 3]);
        assert_eq!(a.add(b).to_vec(), vec![i32::MIN, i32::MAX, 13, 0]);
        assert_eq!(a.mul(I32x4::splat(2)).to_vec(), vec![-2, 0, 14, -6]);
        assert_eq!(I32x4::splat(i32::MAX).horizontal_sum(), i32::MAX.wrapping_mul(4));
    }

    #[test]
    fn test_i32x4_bitwise() {
        let a = I32x4::load(&[0b1100, 0b1010, -1, 0]);
        let b = I32x4::load(&[0b1010, 0b0110, 0x0F0F, -1]);
        assert_eq!(a.bitand(b).to_vec(), vec![0b1000, 0b0010, 0x0F0F, 0]);
        assert_eq!(a.bitor(b).to_vec(), vec![0b1110, 0b1110, -1, -1]);
        assert_eq!(a.bitxor(b).to_vec(), vec![0b0110, 0b1100, !0x0F0F, -1]);
    }

    #[test]
    fn test_i64x2_ops() {
        let a = I64x2::load(&[i64::MAX, 5]);
        let b = I64x2::load(&[2, -4]);
        assert_eq!(a.mul(b).to_vec(), vec![-2, -20]);
        assert_eq!(a.add(I64x2::splat(1)).to_vec(), vec![i64::MIN, 6]);
        assert_eq!(a.dot(b), -22);
        assert_eq!(a.bitand(I64x2::splat(0xFF)).to_vec(), vec![0xFF, 5]);
    }

    // ========================================================================
    // Chunk conversion tests
    // ========================================================================

    #[test]
    fn test_chunks_exact_multiple() {
        let values = [1i32, 2, 3, 4, 5, 6, 7, 8];
        let (chunks, remainder) = to_lane_chunks::<I32x4>(&values);
        assert_eq!(chunks.len(), 2);
        assert!(remainder.is_empty());
        assert_eq!(from_lane_chunks(&chunks, remainder), values.to_vec());
    }

    #[test]
    fn test_chunks_shorter_than_lane() {
        let values = [1.0f32, 2.0, 3.0];
        let (chunks, remainder) = to_lane_chunks::<F32x16>(&values);
        assert!(chunks.is_empty());
        assert_eq!(remainder, &values[..]);
    }
}
