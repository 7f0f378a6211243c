/// Implements a binary operator trait for all four combinations of owned/borrowed operands.
///
/// Both operand types must be [Copy]; the body sees them as owned values named by the pattern.
#[macro_export]
macro_rules! impl_op {
    ($($operator:ident)::+ : fn $fn_name:ident ($a:ident : $a_ty:ty, $b:ident : $b_ty:ty) -> $ret_ty:ty $body:block) => {
        $crate::impl_op!(@inner $($operator)::+ : fn $fn_name ($a:  $a_ty, $b:  $b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner $($operator)::+ : fn $fn_name ($a:  $a_ty, $b: &$b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner $($operator)::+ : fn $fn_name ($a: &$a_ty, $b:  $b_ty) -> $ret_ty $body);
        $crate::impl_op!(@inner $($operator)::+ : fn $fn_name ($a: &$a_ty, $b: &$b_ty) -> $ret_ty $body);
    };

    (@inner $($operator:ident)::+ : fn $fn_name:ident ($a:ident: $a_ty:ty, $b:ident : $b_ty:ty) -> $ret_ty:ty $body:block) => {
        impl $($operator)::+<$b_ty> for $a_ty {
            type Output = $ret_ty;

            #[inline]
            fn $fn_name(self, rhs: $b_ty) -> Self::Output {
                #[allow(unused_mut, clippy::clone_on_copy)]
                let (mut $a, $b) = (self.clone(), rhs.clone());
                $body
            }
        }
    };
}

/// Compound-assignment version of [impl_op]
#[macro_export]
macro_rules! impl_op_assign {
    ($($operator:ident)::+ : fn $fn_name:ident ($a:ident : $a_ty:ty, $b:ident : $b_ty:ty) $body:block) => {
        $crate::impl_op_assign!(@inner $($operator)::+ : fn $fn_name ($a: $a_ty, $b:  $b_ty) $body);
        $crate::impl_op_assign!(@inner $($operator)::+ : fn $fn_name ($a: $a_ty, $b: &$b_ty) $body);
    };

    (@inner $($operator:ident)::+ : fn $fn_name:ident ($a:ident: $lhs:ty, $b:ident : $rhs:ty) $body:block) => {
        impl $($operator)::+<$rhs> for $lhs {
            #[inline]
            fn $fn_name(&mut self, rhs: $rhs) {
                #[allow(unused_mut, clippy::clone_on_copy)]
                let (mut $a, $b) = (self.clone(), rhs.clone());
                $body;
                *self = $a;
            }
        }
    };
}

/// Forwards per-channel float methods (`sqrt`, `clamp`, ...) onto a type that has a `map` method
#[macro_export]
macro_rules! forward_fn {
    (impl $type:ty { $( $fn:ident($( $arg_name:ident : $arg_type:ty),*) );* $(;)? }) => {
        impl $type { $(
            pub fn $fn (&self, $( $arg_name : $arg_type ),* ) -> Self {
                self.map(|c| c.$fn( $($arg_name),* ))
            }
        )* }
    };
}
