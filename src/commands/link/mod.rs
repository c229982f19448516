pub mod link_cmds;
