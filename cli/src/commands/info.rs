use netwalk_common::config::Config;
use netwalk_common::network::address::Address;
use netwalk_common::network::cidr::Cidr;
use netwalk_common::network::target::Target;

use crate::terminal::print;

pub fn info(target: Target, cfg: &Config) -> anyhow::Result<()> {
    match target {
        Target::V4(cidr) => print_block(cidr, cfg),
        Target::V6(cidr) => print_block(cidr, cfg),
    }
    Ok(())
}

fn print_block<A: Address>(cidr: Cidr<A>, cfg: &Config) {
    print::header("block details", cfg);
    print::aligned_line("Block", cidr);
    print::aligned_line("Base", cidr.base());
    print::aligned_line("Netmask", A::from_bits_truncating(cidr.mask()));
    print::aligned_line("Network", cidr.network());
    print::aligned_line("Broadcast", cidr.broadcast());
    print::aligned_line("Size", size_label::<A>(cidr.size()));
}

fn size_label<A: Address>(size: Option<u128>) -> String {
    match size {
        Some(size) => size.to_string(),
        None => format!("2^{}", A::BITS),
    }
}
