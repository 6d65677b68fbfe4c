mod node_links;
mod symbol_links;

pub use self::node_links::NodeLinks;
pub use self::symbol_links::SymbolLinks;

macro_rules! _links {
    ($s: ident, $(($x: ident, $ty: ty)),* $( , )? ) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $s<'cx> {
            $(
                $x: Option<$ty>,
            )*
        }

        impl<'cx> $s<'cx> {
            paste::paste! {
                $(
                    #[allow(unused)]
                    #[track_caller]
                    pub fn [<with_ $x>](mut self, $x: $ty) -> Self {
                        self.[<set_ $x>]($x);
                        self
                    }
                    #[allow(unused)]
                    #[track_caller]
                    pub fn [<set_ $x>](&mut self, $x: $ty) {
                        assert!(self.$x.is_none());
                        self.$x = Some($x);
                    }
                    #[allow(unused)]
                    #[track_caller]
                    pub fn [<get_ $x>](&self) -> Option<$ty> {
                        self.$x
                    }
                )*
            }
        }
    };
}

use _links as links;
