pub(crate) mod pdb2seq;
